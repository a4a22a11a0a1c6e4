// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors from parsing a query string.
///
/// Serialization is total; only decoding untrusted input can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
	#[error("malformed percent-encoding at byte {position} in '{input}'")]
	MalformedEscape { input: String, position: usize },

	#[error("percent-decoded bytes are not valid UTF-8 in '{input}'")]
	InvalidUtf8 { input: String },
}
