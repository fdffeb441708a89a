//! # Edit-File Workflow
//!
//! Pipeline A: list a directory, read a file, have the model correct it, and
//! write the result back to the same path. Steps run strictly in that order;
//! the first failure aborts the run and nothing after it executes.

use crate::application::path_arguments;
use crate::domain::config::WorkflowConfig;
use crate::domain::errors::{Result, WorkflowError};
use crate::domain::registry::ToolRegistry;
use crate::domain::state::WorkflowState;
use crate::domain::traits::LlmProvider;
use crate::strings::{logs, prompts};

pub struct EditWorkflow<'a> {
    tools: &'a ToolRegistry,
    llm: &'a dyn LlmProvider,
    config: &'a WorkflowConfig,
}

impl<'a> EditWorkflow<'a> {
    pub fn new(
        tools: &'a ToolRegistry,
        llm: &'a dyn LlmProvider,
        config: &'a WorkflowConfig,
    ) -> Self {
        Self { tools, llm, config }
    }

    /// Run all four steps against `state`.
    pub async fn run(&self, state: &mut WorkflowState) -> Result<()> {
        self.list_files(state)
            .await
            .inspect_err(|e| report("list_files", e))?;
        self.read_file(state)
            .await
            .inspect_err(|e| report("read_file", e))?;
        self.edit_with_llm(state)
            .await
            .inspect_err(|e| report("edit_with_llm", e))?;
        self.write_file(state)
            .await
            .inspect_err(|e| report("write_file", e))?;

        if let Ok(rendered) = serde_json::to_string_pretty(state) {
            tracing::info!("{}", logs::final_state(&rendered));
        }
        Ok(())
    }

    pub async fn list_files(&self, state: &mut WorkflowState) -> Result<()> {
        tracing::info!("{}", logs::LISTING_FILES);

        let tool = self.tools.get(&self.config.tools.list_directory)?;
        let output = tool.invoke(path_arguments(&self.config.list_dir)).await?;
        let entries: Vec<String> = output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();

        tracing::info!("{}", logs::files_found(&entries));
        state.set_file_list(entries)
    }

    pub async fn read_file(&self, state: &mut WorkflowState) -> Result<()> {
        tracing::info!("{}", logs::READING_FILE);

        let path = &self.config.target_file;
        let tool = self.tools.get(&self.config.tools.read_file)?;
        let content = tool.invoke(path_arguments(path)).await?;

        tracing::info!("{}", logs::file_contents(path, &content));
        state.set_file_content(content)
    }

    pub async fn edit_with_llm(&self, state: &mut WorkflowState) -> Result<()> {
        tracing::info!("{}", logs::EDITING_WITH_LLM);

        let prompt = prompts::correct_text(state.file_content()?);
        let edited = self.llm.completion(&prompt).await?;

        tracing::info!("{}", logs::llm_edited(&edited));
        state.set_updated_content(edited)
    }

    /// Overwrites the file read by [`EditWorkflow::read_file`]. No backup is
    /// taken and nothing is rolled back if the tool fails midway.
    pub async fn write_file(&self, state: &mut WorkflowState) -> Result<()> {
        tracing::info!("{}", logs::WRITING_FILE);

        let path = &self.config.target_file;
        let content = state.updated_content()?;
        let tool = self.tools.get(&self.config.tools.write_file)?;

        let mut arguments = path_arguments(path);
        arguments.insert("content".to_string(), content.into());
        tool.invoke(arguments).await?;

        tracing::info!("{}", logs::file_updated(path));
        Ok(())
    }
}

fn report(step: &str, err: &WorkflowError) {
    tracing::error!("{}", logs::step_failed(step, &err.to_string()));
}
