// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Filter state to URL query string codec for Atlas.
//!
//! Search and explore pages keep their filter criteria in a [`FilterMap`].
//! This crate turns that map into the canonical query string shared in
//! bookmarks and links, and parses it back on load.
//!
//! - Absent values (`None`, [`FilterValue::Absent`], empty strings, empty
//!   lists) are omitted.
//! - Keys keep their insertion order.
//! - Lists are joined with `,` under a single key and never repeated.
//!
//! # Example
//!
//! ```
//! use atlas_common_query::{build_localized_search_url, deserialize, serialize, FilterMap, QueryValue};
//!
//! let filters = FilterMap::new()
//! 	.with("q", "steel mills")
//! 	.with("isic", vec!["1010", "2020", "3030"])
//! 	.with("page", 2)
//! 	.with("city", None::<&str>);
//!
//! let query = serialize(&filters);
//! assert_eq!(query, "q=steel%20mills&isic=1010%2C2020%2C3030&page=2");
//!
//! let parsed = deserialize(&query).unwrap();
//! assert_eq!(parsed.get("page"), Some(&QueryValue::Number(2.0)));
//!
//! let url = build_localized_search_url(&filters, Some("ar"));
//! assert_eq!(url, "/ar/search?q=steel%20mills&isic=1010%2C2020%2C3030&page=2");
//! ```

mod codec;
mod error;
mod filter;
mod url;

pub use codec::{deserialize, serialize, QueryMap, QueryValue};
pub use error::{QueryError, Result};
pub use filter::{FilterMap, FilterValue};
pub use url::{build_localized_search_url, build_localized_url, SEARCH_BASE_PATH};
