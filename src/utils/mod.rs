//! Utility functions module
//!
//! This module contains the polling state machine, the create-after-delete
//! handling built on it, and logging setup.

pub mod conflict;
pub mod logging;
pub mod retry;

pub use logging::init_logging;
pub use retry::{wait_for_state, PollError, PollState, StateChangeConf};
