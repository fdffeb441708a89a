//! # scribe
//!
//! Orchestrates Model Context Protocol tool servers and an OpenAI-compatible
//! language model:
//!
//! - `scribe` lists a directory, reads a file, asks the model to fix its grammar
//!   and spelling, and writes the result back.
//! - `scribe-ls` starts a filesystem tool server as a subprocess and prints a
//!   directory listing obtained through it.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod strings;
