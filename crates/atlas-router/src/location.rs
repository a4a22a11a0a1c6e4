// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Parsing a canonical URL back into locale and filter state.

use atlas_common_i18n::{extract_locale, strip_locale, Locale};
use atlas_common_query::{deserialize, QueryError, QueryMap};

/// A canonical URL split into its parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
	pub locale: Locale,
	/// Path below the locale segment, always starting with `/`.
	pub path: String,
	pub filters: QueryMap,
	pub fragment: Option<String>,
}

impl Location {
	/// Parse `/{locale}{path}[?query][#fragment]`.
	///
	/// A missing or unsupported locale segment yields the default locale and
	/// leaves the path as is.
	///
	/// # Errors
	///
	/// Returns a [`QueryError`] if the query string is not decodable.
	pub fn parse(url: &str) -> Result<Self, QueryError> {
		let (rest, fragment) = match url.split_once('#') {
			Some((rest, fragment)) => (rest, Some(fragment.to_string())),
			None => (url, None),
		};
		let (pathname, query) = rest.split_once('?').unwrap_or((rest, ""));

		Ok(Self {
			locale: extract_locale(Some(pathname)),
			path: strip_locale(pathname).into_owned(),
			filters: deserialize(query)?,
			fragment,
		})
	}
}
