// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wires the download controller into the page once the document has been parsed.

use super::bindings::{FORM_ROUTES, FormBinding, LOADING_INDICATOR_ID, bind_forms, must_wait_for_content};
use super::browser::{BrowserPage, FetchTransport};
use super::sections::bind_section_toggles;
use crate::download::{LoadingIndicator, submit};
use leptos::prelude::{document, window};
use leptos::task::{Executor, spawn_local};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, HtmlFormElement};

/// Everything a submission needs; one per page, shared by all bound forms.
struct Controller {
	transport: FetchTransport,
	page: BrowserPage,
	indicator: LoadingIndicator<HtmlElement>,
}

/// Binds the page now if it's ready, otherwise as soon as `DOMContentLoaded` fires.
pub fn start() {
	if let Err(error) = Executor::init_wasm_bindgen() {
		tracing::debug!(source = ?error, "Async executor was already set up");
	}

	let document = document();
	if !must_wait_for_content(&document.ready_state()) {
		bind_page();
		return;
	}

	let listener = Closure::once_into_js(move |_: Event| bind_page());
	if let Err(error) = document.add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref()) {
		tracing::error!(source = ?error, "Couldn't wait for the page to load");
	}
}

fn bind_page() {
	let window = window();
	let document = document();

	bind_section_toggles(&document);

	let indicator_element = document
		.get_element_by_id(LOADING_INDICATOR_ID)
		.and_then(|element| element.dyn_into::<HtmlElement>().ok());
	let controller = Rc::new(Controller {
		transport: FetchTransport::new(window.clone()),
		page: BrowserPage::new(window, document.clone()),
		indicator: LoadingIndicator::new(indicator_element),
	});

	for binding in bind_forms(&document, FORM_ROUTES) {
		let form_id = binding.form_id;
		match intercept_submit(binding, Rc::clone(&controller)) {
			Ok(()) => tracing::debug!(form_id, "Form bound"),
			Err(error) => tracing::error!(form_id, source = ?error, "Couldn't bind form"),
		}
	}
}

fn intercept_submit(binding: FormBinding<HtmlFormElement>, controller: Rc<Controller>) -> Result<(), JsValue> {
	let form = binding.form.clone();
	let path = binding.path;
	let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
		event.prevent_default();

		let form = form.clone();
		let controller = Rc::clone(&controller);
		spawn_local(async move {
			submit(
				&controller.transport,
				&controller.page,
				&controller.indicator,
				&form,
				path,
			)
			.await;
		});
	});

	binding
		.form
		.add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())?;
	// Bindings last for the lifetime of the page.
	listener.forget();
	Ok(())
}
