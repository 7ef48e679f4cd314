// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Routes `tracing` output to the browser console.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Installs the global subscriber. Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
	let init_result = tracing_subscriber::fmt()
		.with_writer(ConsoleMakeWriter)
		.with_max_level(Level::DEBUG)
		.with_ansi(false)
		.without_time()
		.try_init();
	if let Err(error) = init_result {
		console::warn_1(&JsValue::from_str(&format!("Logging was already set up: {}", error)));
	}
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
	type Writer = ConsoleWriter;

	fn make_writer(&'a self) -> Self::Writer {
		ConsoleWriter::new(Level::INFO)
	}

	fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
		ConsoleWriter::new(*meta.level())
	}
}

/// Buffers one formatted event and sends it to the console when dropped.
struct ConsoleWriter {
	level: Level,
	buffer: Vec<u8>,
}

impl ConsoleWriter {
	fn new(level: Level) -> Self {
		Self {
			level,
			buffer: Vec::new(),
		}
	}
}

impl io::Write for ConsoleWriter {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.buffer.extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl Drop for ConsoleWriter {
	fn drop(&mut self) {
		if self.buffer.is_empty() {
			return;
		}
		let line = String::from_utf8_lossy(&self.buffer);
		let line = JsValue::from_str(line.trim_end());

		if self.level == Level::ERROR {
			console::error_1(&line);
		} else if self.level == Level::WARN {
			console::warn_1(&line);
		} else if self.level == Level::INFO {
			console::info_1(&line);
		} else {
			console::debug_1(&line);
		}
	}
}
