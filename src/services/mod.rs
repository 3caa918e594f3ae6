//! Service layer
//!
//! Business logic shared by the CLI and library users.

mod kml_service;

pub use kml_service::{FetchOutcome, KmlClient};
