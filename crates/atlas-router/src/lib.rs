// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-aware navigation for Atlas.
//!
//! [`LocaleNavigator`] binds the pure locale and query helpers to a host
//! routing system. The host supplies the current route through
//! [`RouteContext`] and mutates history through [`Navigator`]. The
//! navigator keeps no state of its own: the current locale is re-derived
//! from the route on every call, so it always reflects the committed URL.
//!
//! # Example
//!
//! ```
//! use atlas_router::{LocaleNavigator, MemoryHistory};
//!
//! let history = MemoryHistory::new("/en/explore/city/123");
//! let nav = LocaleNavigator::new(&history, &history);
//!
//! nav.change_locale("ar");
//! assert_eq!(history.current(), "/ar/explore/city/123");
//! assert_eq!(history.len(), 1);
//!
//! nav.navigate("about", None);
//! assert_eq!(history.current(), "/ar/about");
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod history;
pub mod location;
pub mod navigator;
pub mod sources;

pub use config::{load_config, load_config_with_file, RouterConfig, RouterConfigLayer};
pub use context::{NavigateOptions, Navigator, RouteContext};
pub use error::ConfigError;
pub use history::MemoryHistory;
pub use location::Location;
pub use navigator::LocaleNavigator;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

pub use atlas_common_i18n::{Locale, DEFAULT_LOCALE};
pub use atlas_common_query::{FilterMap, FilterValue, QueryError, QueryMap, QueryValue};
