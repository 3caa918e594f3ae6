//! Fetch command

use std::io::Write;

use colored::Colorize;

use super::request_input::{load_form, resolve_config};
use crate::cli::RequestArgs;
use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;
use crate::render::Document;
use crate::services::{FetchOutcome, KmlClient};

/// Send one request and write the element content once it is visible
pub async fn fetch(
    config: &StaticConfig,
    request: RequestArgs,
    output: Option<String>,
) -> Result<(), CliError> {
    let config = resolve_config(config, &request)?;
    let form = load_form(&request)?;

    let client = KmlClient::from_config(&config);
    let document = Document::new().with_element(client.element_id());

    match client
        .fetch_and_render(request.kind, &form, &document)
        .await?
    {
        FetchOutcome::Skipped { code } => {
            eprintln!(
                "{} Request kind {} builds no request, nothing sent",
                "ℹ".bold().blue(),
                code.to_string().magenta()
            );
            Ok(())
        }
        FetchOutcome::Rendered { url, status, bytes } => {
            let status_text = if (200..300).contains(&status) {
                status.to_string().green()
            } else {
                status.to_string().yellow()
            };
            eprintln!(
                "{} {} {} ({} bytes)",
                "✓".bold().green(),
                status_text,
                url.dimmed(),
                bytes
            );

            let content = document
                .visible_content(client.element_id())
                .unwrap_or_default();
            write_output(output.as_deref(), &content)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| {
                CliError::CommandError(format!("Failed to write {}: {}", path, e))
            })?;
            eprintln!("  {} {}", "Written to".green(), path.blue());
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| CliError::CommandError(format!("Failed to write stdout: {}", e)))
        }
    }
}
