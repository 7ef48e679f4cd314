// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Expandable page sections: clicking a trigger shows or hides the element right after it.

pub const SECTION_TOGGLE_CLASS: &str = "botao-expansivel";

const SHOWN_DISPLAY: &str = "block";
const HIDDEN_DISPLAY: &str = "none";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
	Shown,
	Hidden,
}

impl Visibility {
	/// Reads an element's inline `display` value. Sections start out hidden by the stylesheet, so anything
	/// other than an explicit `block` counts as hidden.
	pub fn from_display(display: &str) -> Self {
		if display == SHOWN_DISPLAY {
			Self::Shown
		} else {
			Self::Hidden
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			Self::Shown => Self::Hidden,
			Self::Hidden => Self::Shown,
		}
	}

	pub fn display_value(self) -> &'static str {
		match self {
			Self::Shown => SHOWN_DISPLAY,
			Self::Hidden => HIDDEN_DISPLAY,
		}
	}
}

/// The element a section trigger shows and hides.
pub trait SectionContent {
	/// The element's inline `display` value, empty if unset.
	fn display(&self) -> String;

	fn set_display(&self, display: &str);
}

/// Flips a trigger's content between shown and hidden. A trigger with nothing after it does nothing.
/// Returns the new visibility.
pub fn toggle_section<C: SectionContent>(content: Option<&C>) -> Option<Visibility> {
	let content = content?;
	let visibility = Visibility::from_display(&content.display()).toggled();
	content.set_display(visibility.display_value());
	Some(visibility)
}

#[cfg(feature = "hydrate")]
pub use browser::bind_section_toggles;

#[cfg(feature = "hydrate")]
mod browser {
	use super::{SECTION_TOGGLE_CLASS, SectionContent, toggle_section};
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;
	use web_sys::{Document, Element, Event, HtmlElement};

	/// Adds a click listener to every section trigger on the page.
	pub fn bind_section_toggles(document: &Document) {
		let triggers = document.get_elements_by_class_name(SECTION_TOGGLE_CLASS);
		for index in 0..triggers.length() {
			let Some(trigger) = triggers.item(index) else {
				continue;
			};
			if let Err(error) = listen_for_toggle(&trigger) {
				tracing::warn!(source = ?error, "Couldn't bind section toggle");
			}
		}
	}

	fn listen_for_toggle(trigger: &Element) -> Result<(), JsValue> {
		let target = trigger.clone();
		let listener = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
			let content = target
				.next_element_sibling()
				.and_then(|sibling| sibling.dyn_into::<HtmlElement>().ok());
			toggle_section(content.as_ref());
		});
		trigger.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
		// Triggers stay on the page until it unloads.
		listener.forget();
		Ok(())
	}

	impl SectionContent for HtmlElement {
		fn display(&self) -> String {
			self.style().get_property_value("display").unwrap_or_default()
		}

		fn set_display(&self, display: &str) {
			if let Err(error) = self.style().set_property("display", display) {
				tracing::warn!(source = ?error, "Couldn't toggle section");
			}
		}
	}
}
