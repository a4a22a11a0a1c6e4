// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Query string encoding and decoding.
//!
//! The encoding is lossy but deterministic. Booleans come back as text,
//! numeric-looking text comes back as a number, and a single-element list
//! comes back as a scalar. Callers that need exact types validate against
//! their own schema.

use serde::Serialize;
use tracing::trace;

use crate::error::{QueryError, Result};
use crate::filter::{FilterMap, FilterValue};

const LIST_DELIMITER: char = ',';

/// A decoded query string value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
	Text(String),
	List(Vec<String>),
	Number(f64),
}

/// Decoded query parameters in the order they appeared.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryMap {
	entries: Vec<(String, QueryValue)>,
}

impl QueryMap {
	/// Later values for a repeated key replace earlier ones; the key keeps
	/// its first position.
	fn insert(&mut self, key: String, value: QueryValue) {
		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some((_, existing)) => *existing = value,
			None => self.entries.push((key, value)),
		}
	}

	pub fn get(&self, key: &str) -> Option<&QueryValue> {
		self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	/// Text value for `key`; numbers and lists are not converted.
	pub fn get_text(&self, key: &str) -> Option<&str> {
		match self.get(key)? {
			QueryValue::Text(s) => Some(s),
			_ => None,
		}
	}

	pub fn get_number(&self, key: &str) -> Option<f64> {
		match self.get(key)? {
			QueryValue::Number(n) => Some(*n),
			_ => None,
		}
	}

	/// Value for `key` read as a list.
	///
	/// A list filter with a single item decodes as a scalar, so scalars are
	/// returned as a one-item list here.
	pub fn get_list(&self, key: &str) -> Option<Vec<String>> {
		match self.get(key)? {
			QueryValue::List(items) => Some(items.clone()),
			QueryValue::Text(s) => Some(vec![s.clone()]),
			QueryValue::Number(n) => format_number(*n).map(|s| vec![s]),
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
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

/// Plain decimal form of a finite number. `-0` prints as `0`.
fn format_number(n: f64) -> Option<String> {
	if !n.is_finite() {
		return None;
	}
	if n == 0.0 {
		return Some("0".to_string());
	}
	Some(n.to_string())
}

/// Unencoded string form of a value, or `None` if it is omitted.
fn value_to_raw(value: &FilterValue) -> Option<String> {
	let raw = match value {
		FilterValue::Absent => return None,
		FilterValue::Text(s) => s.clone(),
		FilterValue::Number(n) => format_number(*n)?,
		FilterValue::Bool(b) => b.to_string(),
		FilterValue::TextList(items) => items.join(","),
		FilterValue::NumberList(items) => items
			.iter()
			.filter_map(|n| format_number(*n))
			.collect::<Vec<_>>()
			.join(","),
	};
	(!raw.is_empty()).then_some(raw)
}

/// Serialize filters into a query string without a leading `?`.
///
/// Absent entries are skipped, the rest keep insertion order. List items
/// are joined with `,` before percent-encoding, so the delimiter is written
/// as `%2C`. Returns an empty string when every entry is omitted.
pub fn serialize(filters: &FilterMap) -> String {
	filters
		.iter()
		.filter_map(|(key, value)| {
			let raw = value_to_raw(value)?;
			Some(format!(
				"{}={}",
				urlencoding::encode(key),
				urlencoding::encode(&raw)
			))
		})
		.collect::<Vec<_>>()
		.join("&")
}

/// Percent-decode one query component.
///
/// Every `%` must start a two-digit hex escape. `+` is left as is.
fn decode_component(input: &str) -> Result<String> {
	let bytes = input.as_bytes();
	for (position, byte) in bytes.iter().enumerate() {
		if *byte != b'%' {
			continue;
		}
		let escape = bytes.get(position + 1..position + 3);
		if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
			return Err(QueryError::MalformedEscape {
				input: input.to_string(),
				position,
			});
		}
	}

	urlencoding::decode(input)
		.map(|decoded| decoded.into_owned())
		.map_err(|_| QueryError::InvalidUtf8 {
			input: input.to_string(),
		})
}

/// Finite decimal number with optional surrounding whitespace, sign,
/// fraction, and exponent. Leading zeros are allowed.
fn parse_number(value: &str) -> Option<f64> {
	let trimmed = value.trim();
	let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
	let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
		Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
		None => (unsigned, None),
	};

	let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
	let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
	if int_part.is_empty() && frac_part.is_empty() {
		return None;
	}
	if !digits_only(int_part) || !digits_only(frac_part) {
		return None;
	}
	if let Some(exp) = exponent {
		let exp_digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
		if exp_digits.is_empty() || !digits_only(exp_digits) {
			return None;
		}
	}

	trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn classify(value: String) -> QueryValue {
	if value.contains(LIST_DELIMITER) {
		return QueryValue::List(
			value
				.split(LIST_DELIMITER)
				.filter(|item| !item.is_empty())
				.map(str::to_string)
				.collect(),
		);
	}
	match parse_number(&value) {
		Some(n) => QueryValue::Number(n),
		None => QueryValue::Text(value),
	}
}

/// Parse a query string into decoded values.
///
/// A leading `?` is ignored, empty pairs are skipped, and a pair without
/// `=` has an empty value. Values containing `,` become lists of their
/// non-empty items; values that read as a finite decimal become numbers;
/// everything else stays text. No schema is applied.
///
/// # Errors
///
/// Fails on malformed percent-encoding or decoded bytes that are not UTF-8.
pub fn deserialize(query: &str) -> Result<QueryMap> {
	let query = query.strip_prefix('?').unwrap_or(query);
	let mut map = QueryMap::default();

	for pair in query.split('&').filter(|pair| !pair.is_empty()) {
		let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
		let key = decode_component(raw_key)?;
		let value = decode_component(raw_value)?;
		map.insert(key, classify(value));
	}

	trace!(params = map.len(), "decoded query string");
	Ok(map)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn text(s: &str) -> QueryValue {
		QueryValue::Text(s.to_string())
	}

	fn list(items: &[&str]) -> QueryValue {
		QueryValue::List(items.iter().map(|s| s.to_string()).collect())
	}

	#[test]
	fn test_serialize_preserves_insertion_order() {
		let filters = FilterMap::new()
			.with("z", "last")
			.with("a", "first")
			.with("m", "middle");
		assert_eq!(serialize(&filters), "z=last&a=first&m=middle");
	}

	#[test]
	fn test_serialize_list_joins_with_encoded_comma() {
		let filters = FilterMap::new().with("isic", vec!["1010", "2020", "3030"]);
		assert_eq!(serialize(&filters), "isic=1010%2C2020%2C3030");
	}

	#[test]
	fn test_serialize_omits_absent_values() {
		let filters = FilterMap::new()
			.with("a", FilterValue::Absent)
			.with("b", "")
			.with("c", None::<i32>)
			.with("isic", Vec::<String>::new())
			.with("years", Vec::<f64>::new());
		assert_eq!(serialize(&filters), "");
	}

	#[test]
	fn test_serialize_empty_list_only() {
		let filters = FilterMap::new().with("isic", Vec::<String>::new());
		assert_eq!(serialize(&filters), "");
	}

	#[test]
	fn test_serialize_scalars() {
		let filters = FilterMap::new()
			.with("open", true)
			.with("closed", false)
			.with("page", 2)
			.with("ratio", 0.25)
			.with("delta", -3.5)
			.with("zero", -0.0)
			.with("big", 1_000_000);
		assert_eq!(
			serialize(&filters),
			"open=true&closed=false&page=2&ratio=0.25&delta=-3.5&zero=0&big=1000000"
		);
	}

	#[test]
	fn test_serialize_skips_non_finite_numbers() {
		let filters = FilterMap::new()
			.with("a", f64::NAN)
			.with("b", f64::INFINITY)
			.with("c", vec![1.0, f64::NAN, 3.0]);
		assert_eq!(serialize(&filters), "c=1%2C3");
	}

	#[test]
	fn test_serialize_encodes_reserved_characters() {
		let filters = FilterMap::new()
			.with("q", "a&b=c d/é")
			.with("sort key", "+x");
		assert_eq!(
			serialize(&filters),
			"q=a%26b%3Dc%20d%2F%C3%A9&sort%20key=%2Bx"
		);
	}

	#[test]
	fn test_serialize_is_stable() {
		let build = || {
			FilterMap::new()
				.with("q", "port")
				.with("isic", vec!["1010", "2020"])
		};
		assert_eq!(serialize(&build()), serialize(&build()));
	}

	#[test]
	fn test_deserialize_list() {
		let parsed = deserialize("isic=1010%2C2020%2C3030").unwrap();
		assert_eq!(parsed.get("isic"), Some(&list(&["1010", "2020", "3030"])));
	}

	#[test]
	fn test_deserialize_list_drops_empty_segments() {
		let parsed = deserialize("isic=%2C1010%2C%2C2020%2C").unwrap();
		assert_eq!(parsed.get("isic"), Some(&list(&["1010", "2020"])));
		let parsed = deserialize("isic=,").unwrap();
		assert_eq!(parsed.get("isic"), Some(&list(&[])));
	}

	#[test]
	fn test_deserialize_numbers() {
		let parsed = deserialize("a=42&b=-1.5&c=007&d=%2042&e=1e3&f=.5").unwrap();
		assert_eq!(parsed.get_number("a"), Some(42.0));
		assert_eq!(parsed.get_number("b"), Some(-1.5));
		assert_eq!(parsed.get_number("c"), Some(7.0));
		assert_eq!(parsed.get_number("d"), Some(42.0));
		assert_eq!(parsed.get_number("e"), Some(1000.0));
		assert_eq!(parsed.get_number("f"), Some(0.5));
	}

	#[test]
	fn test_deserialize_non_numbers_stay_text() {
		let parsed =
			deserialize("a=true&b=NaN&c=inf&d=1e999&e=0x10&f=12abc&g=&h=-&i=1e").unwrap();
		assert_eq!(parsed.get("a"), Some(&text("true")));
		assert_eq!(parsed.get("b"), Some(&text("NaN")));
		assert_eq!(parsed.get("c"), Some(&text("inf")));
		assert_eq!(parsed.get("d"), Some(&text("1e999")));
		assert_eq!(parsed.get("e"), Some(&text("0x10")));
		assert_eq!(parsed.get("f"), Some(&text("12abc")));
		assert_eq!(parsed.get("g"), Some(&text("")));
		assert_eq!(parsed.get("h"), Some(&text("-")));
		assert_eq!(parsed.get("i"), Some(&text("1e")));
	}

	#[test]
	fn test_deserialize_single_item_list_is_scalar() {
		let filters = FilterMap::new().with("isic", vec!["1010"]);
		let parsed = deserialize(&serialize(&filters)).unwrap();
		assert_eq!(parsed.get("isic"), Some(&QueryValue::Number(1010.0)));
		assert_eq!(parsed.get_list("isic"), Some(vec!["1010".to_string()]));
	}

	#[test]
	fn test_deserialize_leading_question_mark_and_empty_pairs() {
		let parsed = deserialize("?a=x&&b&c=").unwrap();
		let keys: Vec<_> = parsed.keys().collect();
		assert_eq!(keys, vec!["a", "b", "c"]);
		assert_eq!(parsed.get_text("b"), Some(""));
		assert!(deserialize("").unwrap().is_empty());
		assert!(deserialize("?").unwrap().is_empty());
	}

	#[test]
	fn test_deserialize_plus_is_literal() {
		let parsed = deserialize("q=a+b").unwrap();
		assert_eq!(parsed.get_text("q"), Some("a+b"));
	}

	#[test]
	fn test_deserialize_repeated_key_last_wins() {
		let parsed = deserialize("a=1&b=x&a=y").unwrap();
		let keys: Vec<_> = parsed.keys().collect();
		assert_eq!(keys, vec!["a", "b"]);
		assert_eq!(parsed.get_text("a"), Some("y"));
	}

	#[test]
	fn test_deserialize_value_with_equals() {
		let parsed = deserialize("next=a=b").unwrap();
		assert_eq!(parsed.get_text("next"), Some("a=b"));
	}

	#[test]
	fn test_deserialize_malformed_escape() {
		let err = deserialize("q=abc%zz").unwrap_err();
		assert_eq!(
			err,
			QueryError::MalformedEscape {
				input: "abc%zz".to_string(),
				position: 3,
			}
		);
		assert!(matches!(
			deserialize("q=%4"),
			Err(QueryError::MalformedEscape { position: 0, .. })
		));
		assert!(matches!(
			deserialize("%=1"),
			Err(QueryError::MalformedEscape { .. })
		));
	}

	#[test]
	fn test_deserialize_invalid_utf8() {
		assert!(matches!(
			deserialize("q=%FF%FE"),
			Err(QueryError::InvalidUtf8 { .. })
		));
	}

	#[test]
	fn test_get_helpers() {
		let parsed = deserialize("q=port&page=3&isic=1%2C2").unwrap();
		assert_eq!(parsed.get_text("q"), Some("port"));
		assert_eq!(parsed.get_text("page"), None);
		assert_eq!(parsed.get_number("q"), None);
		assert_eq!(parsed.get_list("page"), Some(vec!["3".to_string()]));
		assert_eq!(
			parsed.get_list("isic"),
			Some(vec!["1".to_string(), "2".to_string()])
		);
		assert_eq!(parsed.get("missing"), None);
	}

	/// What a filter value decodes to after a round trip.
	fn expected(value: &FilterValue) -> Option<QueryValue> {
		let raw = value_to_raw(value)?;
		Some(classify(raw))
	}

	fn filter_value() -> impl Strategy<Value = FilterValue> {
		prop_oneof![
			Just(FilterValue::Absent),
			Just(FilterValue::Text(String::new())),
			"[a-z][a-z &/=?#%]{0,10}".prop_map(FilterValue::Text),
			(-10_000i64..10_000).prop_map(|n| FilterValue::Number(n as f64)),
			any::<bool>().prop_map(FilterValue::Bool),
			prop::collection::vec("[a-z0-9]{1,5}", 0..4).prop_map(FilterValue::TextList),
			prop::collection::vec((0i64..5_000).prop_map(|n| n as f64), 0..4)
				.prop_map(FilterValue::NumberList),
		]
	}

	fn filter_map() -> impl Strategy<Value = FilterMap> {
		prop::collection::vec(("[a-z_]{1,8}", filter_value()), 0..8)
			.prop_map(|entries| entries.into_iter().collect::<FilterMap>())
	}

	proptest! {
		/// Decoding an encoded map yields the normalized map in the same order.
		#[test]
		fn round_trip_normalizes(filters in filter_map()) {
			let parsed = deserialize(&serialize(&filters)).unwrap();
			let want: Vec<(String, QueryValue)> = filters
				.iter()
				.filter_map(|(k, v)| expected(v).map(|q| (k.to_string(), q)))
				.collect();
			let got: Vec<(String, QueryValue)> = parsed
				.iter()
				.map(|(k, v)| (k.to_string(), v.clone()))
				.collect();
			prop_assert_eq!(got, want);
		}

		/// Multi-item lists round trip exactly.
		#[test]
		fn lists_round_trip(items in prop::collection::vec("[a-z0-9]{1,6}", 2..6)) {
			let filters = FilterMap::new().with("isic", items.clone());
			let parsed = deserialize(&serialize(&filters)).unwrap();
			prop_assert_eq!(parsed.get("isic"), Some(&QueryValue::List(items)));
		}

		/// The serialized form never repeats a key and never contains a raw comma.
		#[test]
		fn serialized_keys_are_unique(filters in filter_map()) {
			let query = serialize(&filters);
			prop_assert!(!query.contains(','));
			let keys: Vec<&str> = query
				.split('&')
				.filter(|p| !p.is_empty())
				.filter_map(|p| p.split('=').next())
				.collect();
			let mut deduped = keys.clone();
			deduped.sort_unstable();
			deduped.dedup();
			prop_assert_eq!(deduped.len(), keys.len());
		}

		/// Decoding arbitrary input never panics.
		#[test]
		fn deserialize_is_total(query in "\\PC{0,40}") {
			let _ = deserialize(&query);
		}
	}
}
