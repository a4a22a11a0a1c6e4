// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-aware navigation facade.

use std::collections::BTreeMap;

use atlas_common_i18n::{generate_locale_urls, prefix_locale, resolve_locale, strip_locale, Locale};
use atlas_common_query::{build_localized_url, FilterMap};
use tracing::debug;

use crate::config::RouterConfig;
use crate::context::{NavigateOptions, Navigator, RouteContext};

/// Binds locale and query helpers to a host route context and history.
///
/// Nothing is cached between calls. Every operation reads the route context
/// afresh, so the locale always follows the committed URL.
pub struct LocaleNavigator<C, N> {
	context: C,
	navigator: N,
	config: RouterConfig,
}

impl<C: RouteContext, N: Navigator> LocaleNavigator<C, N> {
	pub fn new(context: C, navigator: N) -> Self {
		Self::with_config(context, navigator, RouterConfig::default())
	}

	pub fn with_config(context: C, navigator: N, config: RouterConfig) -> Self {
		Self {
			context,
			navigator,
			config,
		}
	}

	pub fn config(&self) -> &RouterConfig {
		&self.config
	}

	/// Locale of the active route; missing or unsupported params yield the
	/// default locale.
	pub fn current_locale(&self) -> Locale {
		resolve_locale(self.context.locale_param().as_deref())
	}

	/// The path [`navigate`](Self::navigate) would commit for `target`.
	///
	/// Targets starting with `/` are absolute below the locale root; other
	/// targets are relative to the current locale segment. Both resolve to
	/// `/{locale}/{target}`.
	pub fn href(&self, target: &str) -> String {
		let locale = self.current_locale();
		if target.starts_with('/') {
			prefix_locale(target, Some(locale.as_str()))
		} else {
			prefix_locale(&format!("/{target}"), Some(locale.as_str()))
		}
	}

	/// Navigate to `target` in the current locale. `options` are passed to
	/// the host unchanged.
	pub fn navigate(&self, target: &str, options: Option<NavigateOptions>) {
		let path = self.href(target);
		debug!(target_path = %path, ?options, "navigating");
		self.navigator.commit(&path, options);
	}

	/// Switch to `new_locale`, keeping the rest of the current path.
	///
	/// Always replaces the current history entry, so toggling languages
	/// never adds to the back stack. Unsupported codes switch to the default
	/// locale.
	pub fn change_locale(&self, new_locale: &str) {
		let locale = resolve_locale(Some(new_locale));
		let pathname = self.context.pathname();
		let path = prefix_locale(&strip_locale(&pathname), Some(locale.as_str()));
		debug!(from = %pathname, to = %path, locale = %locale, "changing locale");
		self.navigator.commit(&path, Some(NavigateOptions::replace()));
	}

	/// Canonical search URL for `filters` in the current locale.
	pub fn search_url(&self, filters: &FilterMap) -> String {
		build_localized_url(
			&self.config.search_base_path,
			filters,
			Some(self.current_locale().as_str()),
		)
	}

	/// Navigate to the search page with `filters` applied.
	pub fn navigate_search(&self, filters: &FilterMap, options: Option<NavigateOptions>) {
		let url = self.search_url(filters);
		debug!(target_path = %url, ?options, "navigating to search");
		self.navigator.commit(&url, options);
	}

	/// The current path under every supported locale, for alternate-language
	/// links.
	pub fn alternate_urls(&self) -> BTreeMap<Locale, String> {
		generate_locale_urls(&strip_locale(&self.context.pathname()))
	}
}
