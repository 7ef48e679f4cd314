// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serves the built site: the page, its stylesheet, and the wasm bundle that drives the forms.
//!
//! The `/processar-*` endpoints the forms post to are not served here; they belong to the report
//! service, which has to be reachable on the same origin (for example behind the same reverse proxy).

use crate::config::ConfigData;
use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use leptos::config::{LeptosOptions, get_configuration};
use miette::IntoDiagnostic;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub async fn run_server_task(config: Arc<ConfigData>) -> miette::Result<()> {
	let task_result = run_server(config).await;
	if let Err(error) = &task_result {
		tracing::error!(source = ?error, "Web server failed to run");
	}
	task_result
}

async fn run_server(config: Arc<ConfigData>) -> miette::Result<()> {
	let web_config = get_configuration(None).into_diagnostic()?;
	let leptos_options = web_config.leptos_options;
	let site_addr = &config.web.bind_addr;

	let app = Router::new()
		.fallback(file_handler)
		.layer(TraceLayer::new_for_http())
		.with_state(leptos_options);

	tracing::info!("Listening on http://{}", site_addr);
	let listener = TcpListener::bind(site_addr).await.into_diagnostic()?;
	axum::serve(listener, app.into_make_service()).await.into_diagnostic()?;

	Ok(())
}

async fn file_handler(uri: Uri, State(leptos_options): State<LeptosOptions>) -> Response {
	let site_root_dir = leptos_options.site_root.clone();
	match get_static_file(uri, &site_root_dir).await {
		Ok(response) => response,
		Err(status) => status.into_response(),
	}
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response, StatusCode> {
	let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
		return Err(StatusCode::INTERNAL_SERVER_ERROR);
	};

	match ServeDir::new(root).oneshot(request).await {
		Ok(response) => Ok(response.into_response()),
		Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	fn site_root() -> TempDir {
		let root = tempfile::tempdir().unwrap();
		std::fs::create_dir_all(root.path().join("pkg")).unwrap();
		std::fs::write(root.path().join("index.html"), "<form id=\"form-sae\"></form>").unwrap();
		std::fs::write(root.path().join("pkg").join("report-portal.js"), "export {};").unwrap();
		root
	}

	#[tokio::test]
	async fn serves_index_for_root() {
		let root = site_root();
		let response = get_static_file(Uri::from_static("/"), root.path().to_str().unwrap()).await.unwrap();
		assert_eq!(response.status(), StatusCode::OK);
	}

	#[tokio::test]
	async fn serves_bundle_files() {
		let root = site_root();
		let response = get_static_file(Uri::from_static("/pkg/report-portal.js"), root.path().to_str().unwrap())
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::OK);
	}

	#[tokio::test]
	async fn missing_file_is_not_found() {
		let root = site_root();
		let response = get_static_file(Uri::from_static("/processar-sae"), root.path().to_str().unwrap())
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
	}
}
