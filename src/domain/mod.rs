//! # Domain Layer
//!
//! Configuration, errors, workflow state and the traits that stand in for the
//! external tool servers and the language model.

pub mod config;
pub mod errors;
pub mod registry;
pub mod state;
pub mod traits;
