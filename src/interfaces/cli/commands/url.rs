//! Url command

use super::request_input::{load_form, resolve_config};
use crate::cli::RequestArgs;
use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;
use crate::services::KmlClient;

/// Print the URL `fetch` would request
pub fn print_url(config: &StaticConfig, request: RequestArgs) -> Result<(), CliError> {
    let config = resolve_config(config, &request)?;
    let form = load_form(&request)?;

    let client = KmlClient::from_config(&config);
    let url = client.request_url(request.kind, &form).ok_or_else(|| {
        CliError::CommandError(format!(
            "Request kind {} builds no request (known kinds: 1 = KML)",
            request.kind
        ))
    })?;

    println!("{}", url);
    Ok(())
}
