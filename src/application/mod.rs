//! # Application Layer
//!
//! The two pipelines and process-wide setup (logging).

pub mod listing;
pub mod logging;
pub mod workflow;

use crate::domain::traits::ToolArguments;

/// `{"path": path}`, the argument shape every filesystem tool here takes.
pub(crate) fn path_arguments(path: &str) -> ToolArguments {
    let mut arguments = ToolArguments::new();
    arguments.insert("path".to_string(), path.into());
    arguments
}
