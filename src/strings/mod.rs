//! # Strings Module
//!
//! Centralizes log lines and prompts so wording stays consistent across binaries.

pub mod logs;
pub mod prompts;
