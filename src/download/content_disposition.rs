// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Filename extraction from `Content-Disposition` response headers.
//!
//! This is deliberately narrower than RFC 6266: the first `;`-separated segment whose trimmed text starts
//! with the case-sensitive token `filename=` wins, the value ends at the next `=`, and every double quote
//! is dropped. `filename*=` segments never match.

use super::error::DownloadError;

pub const CONTENT_DISPOSITION: &str = "Content-Disposition";

const FILENAME_TOKEN: &str = "filename=";

/// Gets the download filename out of a raw `Content-Disposition` header value.
pub fn filename_from_header(header_value: &str) -> Result<String, DownloadError> {
	let filename_segment = header_value
		.split(';')
		.find(|segment| segment.trim().starts_with(FILENAME_TOKEN))
		.ok_or(DownloadError::MissingFilename)?;

	let value = filename_segment.split('=').nth(1).unwrap_or_default();
	Ok(value.replace('"', ""))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn quoted_filename_keeps_spaces() {
		let filename = filename_from_header("attachment; filename=\"report 2024.csv\"");
		assert_eq!(filename.as_deref(), Ok("report 2024.csv"));
	}

	#[test]
	fn unquoted_filename_ignores_later_segments() {
		let filename = filename_from_header("filename=data.bin; size=100");
		assert_eq!(filename.as_deref(), Ok("data.bin"));
	}

	#[test]
	fn value_stops_at_next_equals_sign() {
		let filename = filename_from_header("attachment; filename=\"a=b.xlsx\"");
		assert_eq!(filename.as_deref(), Ok("a"));
	}

	#[test]
	fn first_matching_segment_wins() {
		let filename = filename_from_header("attachment; filename=first.txt; filename=second.txt");
		assert_eq!(filename.as_deref(), Ok("first.txt"));
	}

	#[test]
	fn quotes_are_stripped_anywhere() {
		let filename = filename_from_header("attachment; filename=we\"ird\".txt");
		assert_eq!(filename.as_deref(), Ok("weird.txt"));
	}

	#[test]
	fn token_match_is_case_sensitive() {
		let filename = filename_from_header("attachment; FileName=\"report.xlsx\"");
		assert_eq!(filename, Err(DownloadError::MissingFilename));
	}

	#[test]
	fn extended_filename_is_not_a_match() {
		let filename = filename_from_header("attachment; filename*=UTF-8''report.xlsx");
		assert_eq!(filename, Err(DownloadError::MissingFilename));
	}

	#[test]
	fn header_without_filename() {
		assert_eq!(filename_from_header("inline"), Err(DownloadError::MissingFilename));
		assert_eq!(filename_from_header(""), Err(DownloadError::MissingFilename));
	}
}
