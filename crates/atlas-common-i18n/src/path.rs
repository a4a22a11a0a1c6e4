// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale path segment handling.
//!
//! Paths are treated as plain strings. Anything from the first `?` or `#`
//! onwards is an opaque tail that is carried through untouched.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::locale::{is_supported, Locale};
use crate::resolve::resolve_locale;

/// Splits `path` at the first `?` or `#`.
fn split_tail(path: &str) -> (&str, &str) {
	match path.find(['?', '#']) {
		Some(idx) => path.split_at(idx),
		None => (path, ""),
	}
}

/// Splits `pathname` into its first segment and everything after it.
///
/// The first segment sits between the first two `/`, or runs up to the
/// first `/` when there is no leading slash.
fn first_segment(pathname: &str) -> (&str, &str) {
	let body = pathname.strip_prefix('/').unwrap_or(pathname);
	let end = body.find(['/', '?', '#']).unwrap_or(body.len());
	body.split_at(end)
}

/// Prefix `path` with a locale segment.
///
/// The locale is resolved through [`resolve_locale`], so an unsupported or
/// missing locale yields the default. Exactly one `/` separates the locale
/// from the path whether or not `path` starts with one, and a root path
/// (`""` or `/`) becomes the bare `/{locale}`.
///
/// ```
/// use atlas_common_i18n::prefix_locale;
///
/// assert_eq!(prefix_locale("/about", Some("ar")), "/ar/about");
/// assert_eq!(prefix_locale("about", Some("ar")), "/ar/about");
/// assert_eq!(prefix_locale("/", Some("xx")), "/en");
/// assert_eq!(prefix_locale("/search?q=a#top", None), "/en/search?q=a#top");
/// ```
pub fn prefix_locale(path: &str, locale: Option<&str>) -> String {
	let locale = resolve_locale(locale);
	let (path, tail) = split_tail(path);
	let rest = path.trim_start_matches('/');

	if rest.is_empty() {
		format!("/{locale}{tail}")
	} else {
		format!("/{locale}/{rest}{tail}")
	}
}

/// Extract the locale from the first segment of `pathname`.
///
/// Never fails: `None`, empty, `/`-only, or unsupported segments all yield
/// the default locale.
pub fn extract_locale(pathname: Option<&str>) -> Locale {
	resolve_locale(pathname.map(|p| first_segment(p).0))
}

/// Remove a leading locale segment from `pathname`.
///
/// The segment is matched the same way [`extract_locale`] matches it, so
/// only supported locale codes are stripped. The result always starts with
/// `/`; the bare locale root becomes `/`.
///
/// ```
/// use atlas_common_i18n::strip_locale;
///
/// assert_eq!(strip_locale("/en/explore/city/123"), "/explore/city/123");
/// assert_eq!(strip_locale("/ar"), "/");
/// assert_eq!(strip_locale("/fr/about"), "/fr/about");
/// ```
pub fn strip_locale(pathname: &str) -> Cow<'_, str> {
	let (segment, rest) = first_segment(pathname);

	if !is_supported(segment) {
		return if pathname.starts_with('/') {
			Cow::Borrowed(pathname)
		} else {
			Cow::Owned(format!("/{pathname}"))
		};
	}

	if rest.starts_with('/') {
		Cow::Borrowed(rest)
	} else {
		Cow::Owned(format!("/{rest}"))
	}
}

/// Compute `path` under every supported locale, for alternate-language links.
///
/// Iteration order of the returned map is the declaration order of
/// [`Locale`].
pub fn generate_locale_urls(path: &str) -> BTreeMap<Locale, String> {
	Locale::ALL
		.into_iter()
		.map(|locale| (locale, prefix_locale(path, Some(locale.as_str()))))
		.collect()
}
