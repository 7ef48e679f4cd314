// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use knus::Decode;
use miette::{IntoDiagnostic, Result, miette};
use tokio::fs::read_to_string;
use tracing::Level;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_document(config_path, &config_file_contents)
}

pub fn parse_config_document(config_path: &str, contents: &str) -> Result<ConfigData> {
	let config: ConfigDocument = knus::parse(config_path, contents).into_diagnostic()?;

	let log_level = match config.log_level {
		Some(level) => level
			.parse()
			.map_err(|_| miette!("`log_level` must be one of trace, debug, info, warn, error; got {}", level))?,
		None => Level::INFO,
	};

	Ok(ConfigData {
		web: config.web,
		log_level,
	})
}

#[derive(Debug, Decode)]
struct ConfigDocument {
	#[knus(child)]
	web: WebConfig,
	#[knus(child, unwrap(argument), default)]
	log_level: Option<String>,
}

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub log_level: Level,
}

#[derive(Debug, Decode)]
pub struct WebConfig {
	#[knus(child, unwrap(argument))]
	pub bind_addr: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn full_config() {
		let config = parse_config_document(
			"config.kdl",
			r#"
			web {
				bind_addr "0.0.0.0:8080"
			}
			log_level "debug"
			"#,
		)
		.unwrap();

		assert_eq!(config.web.bind_addr, "0.0.0.0:8080");
		assert_eq!(config.log_level, Level::DEBUG);
	}

	#[test]
	fn log_level_defaults_to_info() {
		let config = parse_config_document(
			"config.kdl",
			r#"
			web {
				bind_addr "127.0.0.1:3000"
			}
			"#,
		)
		.unwrap();

		assert_eq!(config.log_level, Level::INFO);
	}

	#[test]
	fn missing_bind_addr_is_an_error() {
		assert!(parse_config_document("config.kdl", "web {\n}\n").is_err());
		assert!(parse_config_document("config.kdl", "log_level \"info\"\n").is_err());
	}

	#[test]
	fn unknown_log_level_is_an_error() {
		let result = parse_config_document(
			"config.kdl",
			r#"
			web {
				bind_addr "127.0.0.1:3000"
			}
			log_level "loud"
			"#,
		);
		assert!(result.is_err());
	}

	#[test]
	fn malformed_document_is_an_error() {
		assert!(parse_config_document("config.kdl", "web {").is_err());
	}
}
