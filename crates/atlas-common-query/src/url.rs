// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Canonical localized URLs.

use atlas_common_i18n::prefix_locale;

use crate::codec::serialize;
use crate::filter::FilterMap;

/// Path of the search page below the locale segment.
pub const SEARCH_BASE_PATH: &str = "/search";

/// Build `/{locale}{base_path}` followed by `?{query}` when any filter is set.
///
/// The locale is resolved with the usual fallback to the default locale.
pub fn build_localized_url(base_path: &str, filters: &FilterMap, locale: Option<&str>) -> String {
	let path = prefix_locale(base_path, locale);
	let query = serialize(filters);
	if query.is_empty() {
		path
	} else {
		format!("{path}?{query}")
	}
}

/// Canonical URL of the search page for `filters` in `locale`.
///
/// Equal filter maps and locales always produce byte-identical URLs.
pub fn build_localized_search_url(filters: &FilterMap, locale: Option<&str>) -> String {
	build_localized_url(SEARCH_BASE_PATH, filters, locale)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_search_url_with_filters() {
		let filters = FilterMap::new()
			.with("q", "cement")
			.with("isic", vec!["2394", "2395"]);
		assert_eq!(
			build_localized_search_url(&filters, Some("ar")),
			"/ar/search?q=cement&isic=2394%2C2395"
		);
	}

	#[test]
	fn test_search_url_without_filters_has_no_question_mark() {
		let filters = FilterMap::new().with("q", "").with("isic", Vec::<String>::new());
		assert_eq!(build_localized_search_url(&filters, Some("en")), "/en/search");
		assert_eq!(build_localized_search_url(&FilterMap::new(), None), "/en/search");
	}

	#[test]
	fn test_search_url_invalid_locale_uses_default() {
		let filters = FilterMap::new().with("page", 2);
		assert_eq!(
			build_localized_search_url(&filters, Some("de")),
			"/en/search?page=2"
		);
	}

	#[test]
	fn test_custom_base_path() {
		let filters = FilterMap::new().with("year", 2022);
		assert_eq!(
			build_localized_url("explore/cities", &filters, Some("ar")),
			"/ar/explore/cities?year=2022"
		);
	}
}
