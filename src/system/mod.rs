//! System-level modules
//!
//! Process-wide setup that is not part of the request flow itself.

pub mod logging;
