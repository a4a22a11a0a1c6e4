// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Router configuration.
//!
//! Layered from built-in defaults, an optional TOML file, and environment
//! variables (`ATLAS_ROUTER_*`), in increasing precedence.

use std::path::PathBuf;

use atlas_common_query::SEARCH_BASE_PATH;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::sources::{ConfigSource, DefaultsSource, EnvSource, TomlSource};

/// One partial configuration layer. Unset fields defer to lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfigLayer {
	#[serde(default)]
	pub search_base_path: Option<String>,
}

impl RouterConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.search_base_path.is_some() {
			self.search_base_path = other.search_base_path;
		}
	}

	pub fn finalize(self) -> Result<RouterConfig, ConfigError> {
		let config = RouterConfig {
			search_base_path: self
				.search_base_path
				.unwrap_or_else(|| SEARCH_BASE_PATH.to_string()),
		};
		config.validate()?;
		Ok(config)
	}
}

/// Fully resolved router configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
	/// Path of the search page below the locale segment, e.g. `/search`.
	pub search_base_path: String,
}

impl Default for RouterConfig {
	fn default() -> Self {
		Self {
			search_base_path: SEARCH_BASE_PATH.to_string(),
		}
	}
}

impl RouterConfig {
	pub fn validate(&self) -> Result<(), ConfigError> {
		let path = &self.search_base_path;
		if !path.starts_with('/') {
			return Err(ConfigError::InvalidValue {
				key: "search_base_path".to_string(),
				message: format!("must start with '/', got '{path}'"),
			});
		}
		if path.contains(['?', '#']) {
			return Err(ConfigError::InvalidValue {
				key: "search_base_path".to_string(),
				message: format!("must not contain a query or fragment, got '{path}'"),
			});
		}
		Ok(())
	}
}

fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<RouterConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = RouterConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	let config = merged.finalize()?;
	info!(search_base_path = %config.search_base_path, "router configuration loaded");
	Ok(config)
}

/// Load configuration from defaults, `/etc/atlas/router.toml`, and the
/// environment.
pub fn load_config() -> Result<RouterConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<PathBuf>,
) -> Result<RouterConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}
