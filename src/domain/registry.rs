//! # Tool Registry
//!
//! Name → handle map built once at discovery time.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::errors::{Result, WorkflowError};
use crate::domain::traits::ToolHandle;

#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ToolHandle>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name. Returns `false` and leaves the
    /// existing entry in place if the name is already taken.
    pub fn register(&mut self, tool: Arc<dyn ToolHandle>) -> bool {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            return false;
        }
        self.tools.insert(name, tool);
        true
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn ToolHandle>> {
        self.tools
            .get(name)
            .cloned()
            .ok_or_else(|| WorkflowError::ToolNotFound(name.to_string()))
    }

    /// Sorted tool names, for logging.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
