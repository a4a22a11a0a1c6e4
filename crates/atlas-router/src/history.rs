// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory history for hosts without a browser.

use std::sync::Mutex;

use tracing::trace;

use crate::context::{NavigateOptions, Navigator, RouteContext};

#[derive(Debug)]
struct HistoryState {
	entries: Vec<String>,
	index: usize,
}

/// A linear history stack matched against `/:locale/*`.
///
/// Pushing discards any forward entries; replacing overwrites the current
/// entry in place.
#[derive(Debug)]
pub struct MemoryHistory {
	state: Mutex<HistoryState>,
}

impl MemoryHistory {
	pub fn new(initial: impl Into<String>) -> Self {
		Self {
			state: Mutex::new(HistoryState {
				entries: vec![initial.into()],
				index: 0,
			}),
		}
	}

	fn with_state<R>(&self, f: impl FnOnce(&mut HistoryState) -> R) -> R {
		let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
		f(&mut state)
	}

	/// The current entry, including any query or fragment.
	pub fn current(&self) -> String {
		self.with_state(|s| s.entries[s.index].clone())
	}

	pub fn entries(&self) -> Vec<String> {
		self.with_state(|s| s.entries.clone())
	}

	pub fn len(&self) -> usize {
		self.with_state(|s| s.entries.len())
	}

	/// History always holds at least the initial entry.
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Step back one entry. Returns false at the start of history.
	pub fn back(&self) -> bool {
		self.with_state(|s| {
			if s.index == 0 {
				return false;
			}
			s.index -= 1;
			true
		})
	}

	/// Step forward one entry. Returns false at the end of history.
	pub fn forward(&self) -> bool {
		self.with_state(|s| {
			if s.index + 1 >= s.entries.len() {
				return false;
			}
			s.index += 1;
			true
		})
	}
}

impl RouteContext for MemoryHistory {
	fn locale_param(&self) -> Option<String> {
		let pathname = self.pathname();
		let body = pathname.strip_prefix('/').unwrap_or(&pathname);
		body.split('/')
			.next()
			.filter(|segment| !segment.is_empty())
			.map(str::to_string)
	}

	fn pathname(&self) -> String {
		let current = self.current();
		match current.find(['?', '#']) {
			Some(idx) => current[..idx].to_string(),
			None => current,
		}
	}
}

impl Navigator for MemoryHistory {
	fn commit(&self, target: &str, options: Option<NavigateOptions>) {
		let replace = options.is_some_and(|o| o.replace);
		self.with_state(|s| {
			if replace {
				s.entries[s.index] = target.to_string();
			} else {
				s.entries.truncate(s.index + 1);
				s.entries.push(target.to_string());
				s.index += 1;
			}
			trace!(target_path = target, replace, entries = s.entries.len(), "history updated");
		});
	}
}
