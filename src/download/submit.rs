// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::content_disposition::{CONTENT_DISPOSITION, filename_from_header};
use super::error::DownloadError;
use super::indicator::{IndicatorElement, LoadingIndicator};
use async_trait::async_trait;

/// Prefix of the alert shown to the user when a submission fails.
pub const FAILURE_ALERT_PREFIX: &str = "Failed to generate the download: ";

/// Sends serialized form contents to the server.
#[async_trait(?Send)]
pub trait Transport {
	type Form: ?Sized;
	type Response: DownloadResponse;

	/// Serializes the form's current field values (file inputs included) and POSTs them to `path` as
	/// multipart form data.
	async fn post_form(&self, path: &str, form: &Self::Form) -> Result<Self::Response, DownloadError>;
}

/// A server response to a form submission.
#[async_trait(?Send)]
pub trait DownloadResponse: Sized {
	type Payload;

	fn status(&self) -> u16;

	fn is_success(&self) -> bool {
		(200..300).contains(&self.status())
	}

	/// Looks up a response header. Header names are matched case-insensitively.
	fn header(&self, name: &str) -> Option<String>;

	async fn text(self) -> Result<String, DownloadError>;

	async fn payload(self) -> Result<Self::Payload, DownloadError>;
}

/// Where finished downloads and failures go; in the browser, the save-file flow and `alert`.
pub trait DownloadTarget {
	type Payload;

	fn save(&self, download: DownloadResult<Self::Payload>) -> Result<(), DownloadError>;

	fn alert(&self, message: &str);
}

/// The file produced by one successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadResult<P> {
	pub payload: P,
	pub filename: String,
}

pub type PayloadOf<T> = <<T as Transport>::Response as DownloadResponse>::Payload;

/// Runs one submit-and-download cycle for a form whose native submission has already been suppressed.
///
/// The loading indicator is up for the whole request. Any failure is logged and shown to the user as an
/// alert; nothing is returned to the caller, and the form stays usable for another attempt.
pub async fn submit<T, D, E>(transport: &T, target: &D, indicator: &LoadingIndicator<E>, form: &T::Form, path: &str)
where
	T: Transport,
	D: DownloadTarget<Payload = PayloadOf<T>>,
	E: IndicatorElement,
{
	let _in_flight = indicator.begin();

	let result = match fetch_download(transport, form, path).await {
		Ok(download) => {
			let filename = download.filename.clone();
			target.save(download).map(|_| filename)
		}
		Err(error) => Err(error),
	};

	match result {
		Ok(filename) => tracing::info!(path = %path, filename = %filename, "Download handed to the browser"),
		Err(error) => {
			tracing::error!(path = %path, source = ?error, "Form download failed");
			target.alert(&format!("{}{}", FAILURE_ALERT_PREFIX, error));
		}
	}
}

async fn fetch_download<T: Transport>(
	transport: &T,
	form: &T::Form,
	path: &str,
) -> Result<DownloadResult<PayloadOf<T>>, DownloadError> {
	let response = transport.post_form(path, form).await?;

	if !response.is_success() {
		let status = response.status();
		let body = response.text().await?;
		return Err(DownloadError::server(status, body));
	}

	let header = response
		.header(CONTENT_DISPOSITION)
		.ok_or(DownloadError::MissingHeader)?;
	let filename = filename_from_header(&header)?;
	let payload = response.payload().await?;

	Ok(DownloadResult { payload, filename })
}
