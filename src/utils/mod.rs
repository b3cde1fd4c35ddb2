//! Shared helpers for logging, console output and progress reporting

pub mod logging;
