//! kmlquery - KML overlay requests against a CGI endpoint
//!
//! Builds a `createKML` request from seven form values (layer, region,
//! bounding box, time), sends a single GET and renders the returned text
//! into a page element, which is then made visible.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//!
//! # Architecture
//! - `query`: form values, legacy escaping and URL construction
//! - `transport`: HTTP request objects with a three-step fallback
//! - `render`: page elements the response is written into
//! - `services`: fetch-and-render
//! - `config`: Configuration management
//! - `system`: logging setup
//! - `interfaces`: CLI

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod query;
pub mod render;
pub mod services;
pub mod system;
pub mod transport;
pub mod utils;
