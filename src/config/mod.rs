//! Configuration management module
//!
//! This module handles loading the crate's tunables from defaults,
//! configuration files and environment variables.

pub mod settings;

pub use settings::*;
