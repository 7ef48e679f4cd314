// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `web-sys` implementations of the download pipeline's seams.

use super::bindings::{ElementLookup, FormLookup};
use crate::download::{DownloadError, DownloadResponse, DownloadResult, DownloadTarget, IndicatorElement, Transport};
use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Document, FormData, HtmlAnchorElement, HtmlElement, HtmlFormElement, RequestInit, Response, Url, Window};

/// Gets a readable message out of a thrown JavaScript value.
pub fn js_error_message(value: &JsValue) -> String {
	if let Some(error) = value.dyn_ref::<js_sys::Error>() {
		return String::from(error.message());
	}
	value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl FormLookup for Document {
	type Form = HtmlFormElement;

	fn find_form(&self, id: &str) -> ElementLookup<HtmlFormElement> {
		match self.get_element_by_id(id).map(|element| element.dyn_into::<HtmlFormElement>()) {
			Some(Ok(form)) => ElementLookup::Form(form),
			Some(Err(_)) => ElementLookup::NotAForm,
			None => ElementLookup::Missing,
		}
	}
}

impl IndicatorElement for HtmlElement {
	fn set_visible(&self, visible: bool) {
		let display = if visible { "flex" } else { "none" };
		if let Err(error) = self.style().set_property("display", display) {
			tracing::warn!(source = %js_error_message(&error), "Couldn't update loading indicator");
		}
	}
}

/// Posts forms with the browser's `fetch`.
pub struct FetchTransport {
	window: Window,
}

impl FetchTransport {
	pub fn new(window: Window) -> Self {
		Self { window }
	}
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
	type Form = HtmlFormElement;
	type Response = FetchResponse;

	async fn post_form(&self, path: &str, form: &HtmlFormElement) -> Result<FetchResponse, DownloadError> {
		let body = FormData::new_with_form(form).map_err(|error| DownloadError::FormData(js_error_message(&error)))?;

		let init = RequestInit::new();
		init.set_method("POST");
		init.set_body(&body);

		let response = JsFuture::from(self.window.fetch_with_str_and_init(path, &init))
			.await
			.map_err(|error| DownloadError::NetworkFailure(js_error_message(&error)))?;
		let response = response
			.dyn_into::<Response>()
			.map_err(|error| DownloadError::NetworkFailure(js_error_message(&error)))?;

		Ok(FetchResponse(response))
	}
}

pub struct FetchResponse(Response);

#[async_trait(?Send)]
impl DownloadResponse for FetchResponse {
	type Payload = Blob;

	fn status(&self) -> u16 {
		self.0.status()
	}

	fn is_success(&self) -> bool {
		self.0.ok()
	}

	fn header(&self, name: &str) -> Option<String> {
		self.0.headers().get(name).ok().flatten()
	}

	async fn text(self) -> Result<String, DownloadError> {
		let promise = self.0.text().map_err(response_body_error)?;
		let text = JsFuture::from(promise).await.map_err(response_body_error)?;
		Ok(text.as_string().unwrap_or_default())
	}

	async fn payload(self) -> Result<Blob, DownloadError> {
		let promise = self.0.blob().map_err(response_body_error)?;
		let blob = JsFuture::from(promise).await.map_err(response_body_error)?;
		blob.dyn_into::<Blob>().map_err(response_body_error)
	}
}

fn response_body_error(error: JsValue) -> DownloadError {
	DownloadError::ResponseBody(js_error_message(&error))
}

/// Saves downloads through a throwaway `<a download>` link and reports failures with `alert`.
pub struct BrowserPage {
	window: Window,
	document: Document,
}

impl BrowserPage {
	pub fn new(window: Window, document: Document) -> Self {
		Self { window, document }
	}

	fn click_download_link(&self, url: &str, filename: &str) -> Result<(), JsValue> {
		let link = self.document.create_element("a")?.dyn_into::<HtmlAnchorElement>()?;
		link.set_href(url);
		link.set_download(filename);

		let body = self
			.document
			.body()
			.ok_or_else(|| JsValue::from_str("The document has no body"))?;
		body.append_child(&link)?;
		link.click();
		body.remove_child(&link)?;

		Ok(())
	}
}

impl DownloadTarget for BrowserPage {
	type Payload = Blob;

	fn save(&self, download: DownloadResult<Blob>) -> Result<(), DownloadError> {
		let url = Url::create_object_url_with_blob(&download.payload)
			.map_err(|error| DownloadError::Save(js_error_message(&error)))?;

		let click_result = self.click_download_link(&url, &download.filename);
		if let Err(error) = Url::revoke_object_url(&url) {
			tracing::warn!(source = %js_error_message(&error), "Couldn't release download URL");
		}

		click_result.map_err(|error| DownloadError::Save(js_error_message(&error)))
	}

	fn alert(&self, message: &str) {
		if let Err(error) = self.window.alert_with_message(message) {
			tracing::error!(source = %js_error_message(&error), "Couldn't show alert");
		}
	}
}
