// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale support for Atlas routing.
//!
//! Every public URL in the admin console and the public site starts with a
//! locale segment (`/en/...`, `/ar/...`). This crate owns the fixed set of
//! supported locales and the string operations on that segment.
//!
//! Unsupported or missing locales are never an error here: they resolve to
//! [`DEFAULT_LOCALE`]. A stale or hand-edited link degrades to the default
//! language instead of failing the page.
//!
//! # Example
//!
//! ```
//! use atlas_common_i18n::{extract_locale, prefix_locale, resolve_locale, strip_locale, Locale};
//!
//! assert_eq!(resolve_locale(Some("ar")), Locale::Ar);
//! assert_eq!(resolve_locale(Some("fr")), Locale::En);
//!
//! let path = prefix_locale("/explore/city/123", Some("ar"));
//! assert_eq!(path, "/ar/explore/city/123");
//! assert_eq!(extract_locale(Some(&path)), Locale::Ar);
//! assert_eq!(strip_locale(&path), "/explore/city/123");
//! ```

mod locale;
mod path;
mod resolve;

pub use locale::{
	available_locales, is_rtl, is_supported, locale_info, Direction, Locale, LocaleInfo,
	UnsupportedLocale,
};
pub use path::{extract_locale, generate_locale_urls, prefix_locale, strip_locale};
pub use resolve::resolve_locale;

pub use locale::{DEFAULT_LOCALE, LOCALES};
