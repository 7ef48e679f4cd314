// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Everything that can go wrong between intercepting a submit and handing the file to the browser.
/// All variants are handled the same way: logged, then shown to the user as an alert.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DownloadError {
	#[error("Network request failed: {0}")]
	NetworkFailure(String),
	/// The server answered with a non-success status. Holds the response body, or a status fallback
	/// when the body was empty.
	#[error("{0}")]
	Server(String),
	#[error("Content-Disposition header not found.")]
	MissingHeader,
	#[error("Filename not found in the Content-Disposition header.")]
	MissingFilename,
	#[error("Couldn't read the form fields: {0}")]
	FormData(String),
	#[error("Couldn't read the response body: {0}")]
	ResponseBody(String),
	#[error("Couldn't save the file: {0}")]
	Save(String),
}

impl DownloadError {
	pub fn server(status: u16, body: String) -> Self {
		if body.is_empty() {
			Self::Server(format!("Error {}", status))
		} else {
			Self::Server(body)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn server_error_uses_body_verbatim() {
		let error = DownloadError::server(500, String::from("disk full"));
		assert_eq!(error.to_string(), "disk full");
	}

	#[test]
	fn server_error_falls_back_to_status() {
		let error = DownloadError::server(502, String::new());
		assert_eq!(error.to_string(), "Error 502");
	}
}
