//! # Workflow State
//!
//! The record threaded through the edit-file pipeline. Each field is written by
//! exactly one step and at most once per run.

use serde::Serialize;

use crate::domain::errors::{Result, WorkflowError};

#[derive(Debug, Default, Clone, Serialize, PartialEq)]
pub struct WorkflowState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_content: Option<String>,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_file_list(&mut self, entries: Vec<String>) -> Result<()> {
        set_once(&mut self.file_list, entries, "file_list")
    }

    pub fn set_file_content(&mut self, content: String) -> Result<()> {
        set_once(&mut self.file_content, content, "file_content")
    }

    pub fn set_updated_content(&mut self, content: String) -> Result<()> {
        set_once(&mut self.updated_content, content, "updated_content")
    }

    pub fn file_content(&self) -> Result<&str> {
        self.file_content
            .as_deref()
            .ok_or_else(|| unset("file_content"))
    }

    pub fn updated_content(&self) -> Result<&str> {
        self.updated_content
            .as_deref()
            .ok_or_else(|| unset("updated_content"))
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, field: &str) -> Result<()> {
    if slot.is_some() {
        return Err(WorkflowError::State(format!("{field} already set")));
    }
    *slot = Some(value);
    Ok(())
}

fn unset(field: &str) -> WorkflowError {
    WorkflowError::State(format!("{field} has not been set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_set_once() {
        let mut state = WorkflowState::new();
        state.set_file_content("Teh cat sat.".to_string()).unwrap();
        assert_eq!(state.file_content().unwrap(), "Teh cat sat.");

        let err = state.set_file_content("again".to_string()).unwrap_err();
        assert!(matches!(err, WorkflowError::State(_)));
        assert_eq!(state.file_content().unwrap(), "Teh cat sat.");
    }

    #[test]
    fn test_read_before_write() {
        let state = WorkflowState::new();
        assert!(matches!(
            state.updated_content(),
            Err(WorkflowError::State(_))
        ));
    }

    #[test]
    fn test_serializes_only_set_fields() {
        let mut state = WorkflowState::new();
        state.set_file_list(vec!["[FILE] example.txt".to_string()]).unwrap();

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, serde_json::json!({ "file_list": ["[FILE] example.txt"] }));
    }
}
