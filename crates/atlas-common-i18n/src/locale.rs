// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locale definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A supported locale.
///
/// Declaration order is significant: it is the enumeration order used for
/// alternate-language links and the `Ord` order of the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	En,
	Ar,
}

/// The locale used whenever a candidate is missing or unsupported.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	Ltr,
	Rtl,
}

impl Direction {
	/// Value for the HTML `dir` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}
}

/// Display metadata for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
	pub locale: Locale,
	pub code: &'static str,
	pub name: &'static str,
	pub native_name: &'static str,
	pub direction: Direction,
}

/// All supported locales, in declaration order.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		locale: Locale::En,
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		locale: Locale::Ar,
		code: "ar",
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
];

impl Locale {
	pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

	/// The locale code as it appears in URL path segments.
	pub fn as_str(self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Ar => "ar",
		}
	}

	pub fn info(self) -> &'static LocaleInfo {
		match self {
			Locale::En => &LOCALES[0],
			Locale::Ar => &LOCALES[1],
		}
	}

	pub fn direction(self) -> Direction {
		self.info().direction
	}

	/// Exact, case-sensitive lookup of a locale code.
	pub fn from_code(code: &str) -> Option<Locale> {
		LOCALES.iter().find(|info| info.code == code).map(|info| info.locale)
	}
}

impl Default for Locale {
	fn default() -> Self {
		DEFAULT_LOCALE
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Returned by the strict [`FromStr`] parse of [`Locale`].
///
/// Routing code never sees this: it goes through
/// [`resolve_locale`](crate::resolve_locale), which falls back to the default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale: '{0}'")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
	type Err = UnsupportedLocale;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Locale::from_code(s).ok_or_else(|| UnsupportedLocale(s.to_string()))
	}
}

/// Returns true iff `code` is exactly one of the supported locale codes.
pub fn is_supported(code: &str) -> bool {
	Locale::from_code(code).is_some()
}

/// Returns true if `code` is a supported right-to-left locale.
pub fn is_rtl(code: &str) -> bool {
	Locale::from_code(code).is_some_and(|l| l.direction() == Direction::Rtl)
}

pub fn locale_info(code: &str) -> Option<&'static LocaleInfo> {
	Locale::from_code(code).map(Locale::info)
}

/// Codes of all supported locales, in declaration order.
pub fn available_locales() -> impl Iterator<Item = &'static str> {
	LOCALES.iter().map(|info| info.code)
}
