//! services/api/src/bin/openapi.rs
//!
//! Dumps the OpenAPI document for the page, chat and state routes.
//!
//! Usage: `openapi [OUTPUT]`. Without an argument the document is written to
//! `openapi.json` in the working directory.

use api_lib::{error::ApiError, web::rest::ApiDoc};
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use tracing::info;
use utoipa::OpenApi;

const DEFAULT_OUTPUT: &str = "openapi.json";

fn output_path(arg: Option<OsString>) -> PathBuf {
    arg.map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}

fn main() -> Result<(), ApiError> {
    tracing_subscriber::fmt().with_target(false).init();

    let output = output_path(std::env::args_os().nth(1));
    let document = ApiDoc::openapi();
    let route_count = document.paths.paths.len();
    let json = document.to_pretty_json().map_err(io::Error::other)?;

    if let Some(dir) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(&output, json)?;
    info!("Wrote {} route(s) to {}", route_count, output.display());
    Ok(())
}
