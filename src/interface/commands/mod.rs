//! # Command Handlers
//!
//! One handler per binary. Each owns the resources it acquires and releases
//! them before returning, on success and on failure.

pub mod edit;
pub mod list;
