// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::{Locale, DEFAULT_LOCALE};

/// Resolve a candidate locale code to a supported [`Locale`].
///
/// Every locale that enters routing passes through here. A candidate that is
/// missing, empty, or not exactly one of the supported codes yields
/// [`DEFAULT_LOCALE`]; the invalid value is never passed through.
///
/// # Example
///
/// ```
/// use atlas_common_i18n::{resolve_locale, Locale};
///
/// assert_eq!(resolve_locale(Some("ar")), Locale::Ar);
/// assert_eq!(resolve_locale(Some("AR")), Locale::En);
/// assert_eq!(resolve_locale(None), Locale::En);
/// ```
pub fn resolve_locale(candidate: Option<&str>) -> Locale {
	candidate
		.and_then(Locale::from_code)
		.unwrap_or(DEFAULT_LOCALE)
}
