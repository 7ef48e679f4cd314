// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::Cell;

/// A page element that can be shown or hidden.
pub trait IndicatorElement {
	fn set_visible(&self, visible: bool);
}

/// Visual busy flag shared by every bound form.
///
/// Each in-flight submission holds one count, so the element only hides once the last overlapping
/// request has finished. A page without the element still counts, it just has nothing to draw.
pub struct LoadingIndicator<E> {
	element: Option<E>,
	in_flight: Cell<usize>,
}

impl<E: IndicatorElement> LoadingIndicator<E> {
	pub fn new(element: Option<E>) -> Self {
		Self {
			element,
			in_flight: Cell::new(0),
		}
	}

	pub fn show(&self) {
		self.in_flight.set(self.in_flight.get() + 1);
		if let Some(element) = &self.element {
			element.set_visible(true);
		}
	}

	pub fn hide(&self) {
		let remaining = self.in_flight.get().saturating_sub(1);
		self.in_flight.set(remaining);
		if remaining == 0 {
			if let Some(element) = &self.element {
				element.set_visible(false);
			}
		}
	}

	/// Shows the indicator until the returned guard is dropped.
	pub fn begin(&self) -> InFlight<'_, E> {
		self.show();
		InFlight { indicator: self }
	}

	pub fn in_flight(&self) -> usize {
		self.in_flight.get()
	}
}

/// Keeps the loading indicator up for one request. Hides it exactly once on drop.
#[must_use = "the indicator hides as soon as this guard is dropped"]
pub struct InFlight<'a, E: IndicatorElement> {
	indicator: &'a LoadingIndicator<E>,
}

impl<E: IndicatorElement> Drop for InFlight<'_, E> {
	fn drop(&mut self) {
		self.indicator.hide();
	}
}
