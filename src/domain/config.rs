//! # Configuration
//!
//! Loading and validation of the application's configuration file (`config.yaml`).
//! Defines the tool-server descriptors, the model settings, and the paths each
//! pipeline operates on. Loaded once at start and passed by reference.
//!
//! The two binaries share the file but not its sections: `scribe` reads `mcp`,
//! `model` and `workflow`; `scribe-ls` reads only `listing`. Each section is
//! optional on disk and checked by the binary that uses it.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::domain::errors::{Result, WorkflowError};

pub const CONFIG_FILE: &str = "config.yaml";
pub const CONFIG_ENV: &str = "SCRIBE_CONFIG";

/// Main application configuration structure.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub mcp: Option<McpConfig>,
    #[serde(default)]
    pub model: Option<ModelConfig>,
    #[serde(default)]
    pub workflow: Option<WorkflowConfig>,
    #[serde(default)]
    pub listing: Option<ListingConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The sections the edit-file pipeline runs on, once validated.
#[derive(Debug, Clone, Copy)]
pub struct EditSettings<'a> {
    pub mcp: &'a McpConfig,
    pub model: &'a ModelConfig,
    pub workflow: &'a WorkflowConfig,
}

/// Tool servers, keyed by a name used only for logging and collision order.
#[derive(Debug, Deserialize, Clone)]
pub struct McpConfig {
    #[serde(default)]
    pub servers: BTreeMap<String, ServerConfig>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Stdio,
}

/// How to launch a single tool server.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default)]
    pub transport: Transport,
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub cwd: Option<PathBuf>,
    #[serde(default)]
    pub env: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    pub model: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Unset means the provider's conventional variable (`GROQ_API_KEY`, ...).
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Request timeout in seconds. Unset means the HTTP client's default (none).
    #[serde(default)]
    pub timeout: Option<u64>,
}

fn default_provider() -> String {
    "groq".to_string()
}

/// Paths and tool names for the edit-file pipeline.
#[derive(Debug, Deserialize, Clone)]
pub struct WorkflowConfig {
    pub list_dir: String,
    /// Read from and written back to; the same path is used for both.
    pub target_file: String,
    #[serde(default)]
    pub tools: ToolNames,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ToolNames {
    #[serde(default = "default_list_tool")]
    pub list_directory: String,
    #[serde(default = "default_read_tool")]
    pub read_file: String,
    #[serde(default = "default_write_tool")]
    pub write_file: String,
}

impl Default for ToolNames {
    fn default() -> Self {
        Self {
            list_directory: default_list_tool(),
            read_file: default_read_tool(),
            write_file: default_write_tool(),
        }
    }
}

fn default_list_tool() -> String {
    "list_directory".to_string()
}
fn default_read_tool() -> String {
    "read_file".to_string()
}
fn default_write_tool() -> String {
    "write_file".to_string()
}

/// Subprocess and target for the list-directory pipeline.
#[derive(Debug, Deserialize, Clone)]
pub struct ListingConfig {
    pub server: ServerConfig,
    #[serde(default = "default_listing_path")]
    pub path: String,
    #[serde(default = "default_list_tool")]
    pub tool: String,
}

fn default_listing_path() -> String {
    ".".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Parse a YAML document. Sections are validated later, per pipeline.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| WorkflowError::Configuration(format!("Failed to parse YAML: {e}")))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            WorkflowError::Configuration(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    /// Resolve which file to load: an explicit path wins, then `./config.yaml`,
    /// then the per-user config directory.
    pub fn locate(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }

        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            return Ok(local);
        }

        if let Some(user) = dirs::config_dir().map(|d| d.join("scribe").join(CONFIG_FILE))
            && user.exists()
        {
            return Ok(user);
        }

        Err(WorkflowError::Configuration(format!(
            "No {CONFIG_FILE} found (pass --config or set {CONFIG_ENV})"
        )))
    }

    /// Check the `mcp`, `model` and `workflow` sections used by `scribe`.
    pub fn validate_edit(&self) -> Result<EditSettings<'_>> {
        let mcp = section(&self.mcp, "mcp")?;
        let model = section(&self.model, "model")?;
        let workflow = section(&self.workflow, "workflow")?;

        if mcp.servers.is_empty() {
            return Err(missing("mcp.servers must list at least one server"));
        }
        for (name, server) in &mcp.servers {
            server.validate(&format!("mcp.servers.{name}"))?;
        }

        if model.model.trim().is_empty() {
            return Err(missing("model.model is empty"));
        }
        if workflow.list_dir.trim().is_empty() {
            return Err(missing("workflow.list_dir is empty"));
        }
        if workflow.target_file.trim().is_empty() {
            return Err(missing("workflow.target_file is empty"));
        }
        let tools = &workflow.tools;
        for (key, value) in [
            ("list_directory", &tools.list_directory),
            ("read_file", &tools.read_file),
            ("write_file", &tools.write_file),
        ] {
            if value.trim().is_empty() {
                return Err(missing(&format!("workflow.tools.{key} is empty")));
            }
        }

        Ok(EditSettings {
            mcp,
            model,
            workflow,
        })
    }

    /// Check the `listing` section used by `scribe-ls`.
    pub fn validate_listing(&self) -> Result<&ListingConfig> {
        let listing = section(&self.listing, "listing")?;
        listing.server.validate("listing.server")?;
        if listing.tool.trim().is_empty() {
            return Err(missing("listing.tool is empty"));
        }
        Ok(listing)
    }
}

impl ServerConfig {
    fn validate(&self, field: &str) -> Result<()> {
        if self.command.trim().is_empty() {
            return Err(missing(&format!("{field}.command is empty")));
        }
        Ok(())
    }
}

fn section<'a, T>(value: &'a Option<T>, name: &str) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| missing(&format!("{name} section is missing")))
}

fn missing(message: &str) -> WorkflowError {
    WorkflowError::Configuration(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
mcp:
  servers:
    filesystem:
      transport: stdio
      command: npx
      args: ["-y", "@modelcontextprotocol/server-filesystem", "/srv/data"]
model:
  model: llama3-8b-8192
workflow:
  list_dir: /srv/data
  target_file: /srv/data/example.txt
listing:
  server:
    command: node
    args: ["dist/index.js", "/srv/notes"]
    cwd: /opt/servers/filesystem
"#;

    #[test]
    fn test_parse_sample_with_defaults() {
        let config = AppConfig::from_yaml(SAMPLE).expect("sample should parse");
        let edit = config.validate_edit().expect("edit sections should validate");

        let server = &edit.mcp.servers["filesystem"];
        assert_eq!(server.transport, Transport::Stdio);
        assert_eq!(server.command, "npx");
        assert_eq!(server.args.len(), 3);

        assert_eq!(edit.model.provider, "groq");
        assert!(edit.model.api_key_env.is_none());
        assert!(edit.model.timeout.is_none());

        assert_eq!(edit.workflow.tools.list_directory, "list_directory");
        assert_eq!(edit.workflow.tools.read_file, "read_file");
        assert_eq!(edit.workflow.tools.write_file, "write_file");

        let listing = config.validate_listing().expect("listing should validate");
        assert_eq!(listing.path, ".");
        assert_eq!(listing.tool, "list_directory");
        assert_eq!(
            listing.server.cwd.as_deref(),
            Some(Path::new("/opt/servers/filesystem"))
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_listing_only_config() {
        let yaml = r#"
listing:
  server:
    command: node
    args: ["dist/index.js", "/srv/notes"]
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        let listing = config.validate_listing().unwrap();
        assert_eq!(listing.server.command, "node");
        assert_eq!(listing.path, ".");

        let err = config.validate_edit().unwrap_err();
        assert!(matches!(err, WorkflowError::Configuration(_)));
        assert!(err.to_string().contains("mcp section is missing"));
    }

    #[test]
    fn test_edit_only_config() {
        let yaml = r#"
mcp:
  servers:
    filesystem:
      command: rust-mcp-filesystem
      args: ["--allow-write", "/srv/data"]
model:
  provider: openai
  model: gpt-4o-mini
workflow:
  list_dir: /srv/data
  target_file: /srv/data/example.txt
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        let edit = config.validate_edit().unwrap();
        assert_eq!(edit.model.provider, "openai");
        assert_eq!(edit.workflow.target_file, "/srv/data/example.txt");

        let err = config.validate_listing().unwrap_err();
        assert!(err.to_string().contains("listing section is missing"));
    }

    #[test]
    fn test_empty_servers_rejected() {
        let yaml = r#"
mcp:
  servers: {}
model:
  model: llama3-8b-8192
workflow:
  list_dir: /srv/data
  target_file: /srv/data/example.txt
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        let err = config.validate_edit().unwrap_err();
        assert!(matches!(err, WorkflowError::Configuration(_)));
        assert!(err.to_string().contains("mcp.servers"));
    }

    #[test]
    fn test_missing_field_is_configuration_error() {
        let yaml = SAMPLE.replace("  target_file: /srv/data/example.txt\n", "");
        let err = AppConfig::from_yaml(&yaml).unwrap_err();
        assert!(matches!(err, WorkflowError::Configuration(_)));
    }

    #[test]
    fn test_unknown_transport_rejected() {
        let yaml = SAMPLE.replace("transport: stdio", "transport: carrier-pigeon");
        assert!(matches!(
            AppConfig::from_yaml(&yaml),
            Err(WorkflowError::Configuration(_))
        ));
    }

    #[test]
    fn test_blank_tool_name_rejected() {
        let yaml = SAMPLE.replace(
            "  target_file: /srv/data/example.txt\n",
            "  target_file: /srv/data/example.txt\n  tools:\n    write_file: \"\"\n",
        );
        let config = AppConfig::from_yaml(&yaml).unwrap();
        let err = config.validate_edit().unwrap_err();
        assert!(err.to_string().contains("workflow.tools.write_file"));
        assert!(config.validate_listing().is_ok());
    }

    #[test]
    fn test_blank_listing_command_rejected() {
        let yaml = SAMPLE.replace("    command: node", "    command: \"  \"");
        let config = AppConfig::from_yaml(&yaml).unwrap();
        let err = config.validate_listing().unwrap_err();
        assert!(err.to_string().contains("listing.server.command"));
        assert!(config.validate_edit().is_ok());
    }

    #[test]
    fn test_load_from_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, SAMPLE)?;

        let config = AppConfig::load(&path)?;
        assert_eq!(config.validate_edit()?.workflow.target_file, "/srv/data/example.txt");

        let located = AppConfig::locate(Some(&path))?;
        assert_eq!(located, path);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/scribe/config.yaml")).unwrap_err();
        assert!(matches!(err, WorkflowError::Configuration(_)));
    }
}
