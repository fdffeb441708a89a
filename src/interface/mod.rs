//! # Interface Layer
//!
//! Process entry points: command-line parsing, bootstrap, and one handler per binary.

pub mod cli;
pub mod commands;
