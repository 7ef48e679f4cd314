// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod content_disposition;
mod error;
mod indicator;
mod submit;

pub use content_disposition::{CONTENT_DISPOSITION, filename_from_header};
pub use error::DownloadError;
pub use indicator::{InFlight, IndicatorElement, LoadingIndicator};
pub use submit::{DownloadResponse, DownloadResult, DownloadTarget, FAILURE_ALERT_PREFIX, PayloadOf, Transport, submit};
