// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Host routing seams.

/// Options passed through verbatim to [`Navigator::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigateOptions {
	/// Replace the current history entry instead of pushing a new one.
	pub replace: bool,
}

impl NavigateOptions {
	pub fn push() -> Self {
		Self { replace: false }
	}

	pub fn replace() -> Self {
		Self { replace: true }
	}
}

/// The currently matched route, as reported by the host.
pub trait RouteContext {
	/// Raw locale parameter of the matched route. May be missing or
	/// unsupported.
	fn locale_param(&self) -> Option<String>;

	/// Current pathname, without query or fragment.
	fn pathname(&self) -> String;
}

/// The host's history mutation primitive.
///
/// Failures are the host's concern; nothing is reported back.
pub trait Navigator {
	fn commit(&self, target: &str, options: Option<NavigateOptions>);
}

impl<T: RouteContext + ?Sized> RouteContext for &T {
	fn locale_param(&self) -> Option<String> {
		(**self).locale_param()
	}

	fn pathname(&self) -> String {
		(**self).pathname()
	}
}

impl<T: Navigator + ?Sized> Navigator for &T {
	fn commit(&self, target: &str, options: Option<NavigateOptions>) {
		(**self).commit(target, options)
	}
}
