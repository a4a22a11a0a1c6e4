// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed filter criteria.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single filter criterion.
///
/// In JSON this is a plain string, number, boolean, array, or `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
	Text(String),
	Number(f64),
	Bool(bool),
	TextList(Vec<String>),
	NumberList(Vec<f64>),
	#[default]
	Absent,
}

impl FilterValue {
	/// True for values that are omitted from a query string.
	///
	/// `Absent` and the empty string are equivalent; empty lists are
	/// omitted as well.
	pub fn is_absent(&self) -> bool {
		match self {
			FilterValue::Absent => true,
			FilterValue::Text(s) => s.is_empty(),
			FilterValue::TextList(items) => items.is_empty(),
			FilterValue::NumberList(items) => items.is_empty(),
			FilterValue::Number(_) | FilterValue::Bool(_) => false,
		}
	}
}

impl From<String> for FilterValue {
	fn from(value: String) -> Self {
		FilterValue::Text(value)
	}
}

impl From<&str> for FilterValue {
	fn from(value: &str) -> Self {
		FilterValue::Text(value.to_string())
	}
}

impl From<f64> for FilterValue {
	fn from(value: f64) -> Self {
		FilterValue::Number(value)
	}
}

impl From<i32> for FilterValue {
	fn from(value: i32) -> Self {
		FilterValue::Number(f64::from(value))
	}
}

impl From<u32> for FilterValue {
	fn from(value: u32) -> Self {
		FilterValue::Number(f64::from(value))
	}
}

impl From<i64> for FilterValue {
	fn from(value: i64) -> Self {
		FilterValue::Number(value as f64)
	}
}

impl From<bool> for FilterValue {
	fn from(value: bool) -> Self {
		FilterValue::Bool(value)
	}
}

impl From<Vec<String>> for FilterValue {
	fn from(value: Vec<String>) -> Self {
		FilterValue::TextList(value)
	}
}

impl From<Vec<&str>> for FilterValue {
	fn from(value: Vec<&str>) -> Self {
		FilterValue::TextList(value.into_iter().map(str::to_string).collect())
	}
}

impl From<Vec<f64>> for FilterValue {
	fn from(value: Vec<f64>) -> Self {
		FilterValue::NumberList(value)
	}
}

impl From<Vec<i64>> for FilterValue {
	fn from(value: Vec<i64>) -> Self {
		FilterValue::NumberList(value.into_iter().map(|n| n as f64).collect())
	}
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(FilterValue::Absent)
	}
}

/// Insertion-ordered filter criteria keyed by name.
///
/// Order is significant: the query string lists keys in the order they were
/// first inserted. Re-inserting a key replaces its value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterMap {
	entries: Vec<(String, FilterValue)>,
}

impl FilterMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a value, returning the previous value for `key` if any.
	pub fn insert(
		&mut self,
		key: impl Into<String>,
		value: impl Into<FilterValue>,
	) -> Option<FilterValue> {
		let key = key.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some((_, existing)) => Some(std::mem::replace(existing, value)),
			None => {
				self.entries.push((key, value));
				None
			}
		}
	}

	/// Insert a value (builder pattern).
	pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn get(&self, key: &str) -> Option<&FilterValue> {
		self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	pub fn remove(&mut self, key: &str) -> Option<FilterValue> {
		let idx = self.entries.iter().position(|(k, _)| k == key)?;
		Some(self.entries.remove(idx).1)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(k, _)| k.as_str())
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for FilterMap
where
	K: Into<String>,
	V: Into<FilterValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = FilterMap::new();
		for (key, value) in iter {
			map.insert(key, value);
		}
		map
	}
}

impl Serialize for FilterMap {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (key, value) in &self.entries {
			map.serialize_entry(key, value)?;
		}
		map.end()
	}
}

impl<'de> Deserialize<'de> for FilterMap {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct FilterMapVisitor;

		impl<'de> Visitor<'de> for FilterMapVisitor {
			type Value = FilterMap;

			fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str("a map of filter names to values")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FilterMap, A::Error> {
				let mut map = FilterMap::new();
				while let Some((key, value)) = access.next_entry::<String, FilterValue>()? {
					map.insert(key, value);
				}
				Ok(map)
			}
		}

		deserializer.deserialize_map(FilterMapVisitor)
	}
}
