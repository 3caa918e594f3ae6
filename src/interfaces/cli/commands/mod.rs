//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod config_management;
mod fetch;
mod request_input;
mod url;

pub use config_management::{config_generate, config_show};
pub use fetch::fetch;
pub use request_input::{load_form, resolve_config};
pub use url::print_url;
