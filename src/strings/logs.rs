pub fn config_loaded(path: &str) -> String {
    format!("Loaded configuration from {path}")
}

pub fn mcp_connected(server: &str, name: &str, version: &str) -> String {
    format!("MCP server '{server}' connected ({name} {version})")
}

pub fn mcp_disconnected(server: &str) -> String {
    format!("MCP server '{server}' shut down")
}

pub fn mcp_spawn_failed(server: &str, command: &str, err: &str) -> String {
    format!("Failed to start MCP server '{server}' ({command}): {err}")
}

pub fn mcp_handshake_failed(server: &str, err: &str) -> String {
    format!("MCP server '{server}' did not complete initialization: {err}")
}

pub fn mcp_list_tools_failed(server: &str, err: &str) -> String {
    format!("Failed to list tools on MCP server '{server}': {err}")
}

pub fn mcp_shutdown_failed(server: &str, err: &str) -> String {
    format!("Failed to shut down MCP server '{server}': {err}")
}

pub fn mcp_closed(server: &str) -> String {
    format!("MCP server '{server}' has already been shut down")
}

pub fn tools_available(names: &[&str]) -> String {
    format!("🛠️ Available tools from MCP: {names:?}")
}

pub fn tool_shadowed(tool: &str, server: &str) -> String {
    format!("Tool '{tool}' from server '{server}' shadowed by an earlier server; ignoring it")
}

pub const LISTING_FILES: &str = "📂 Listing files...";

pub fn files_found(entries: &[String]) -> String {
    format!("✅ Files found: {entries:?}")
}

pub const READING_FILE: &str = "📄 Reading the target file...";

pub fn file_contents(path: &str, content: &str) -> String {
    format!("✅ Contents of {path}:\n{content}")
}

pub const EDITING_WITH_LLM: &str = "🤖 Editing content with LLM...";

pub fn llm_edited(content: &str) -> String {
    format!("✅ LLM Edited Content:\n{content}")
}

pub const WRITING_FILE: &str = "💾 Writing updated content to file...";

pub fn file_updated(path: &str) -> String {
    format!("✅ File '{path}' successfully updated.")
}

pub fn final_state(state: &str) -> String {
    format!("🏁 Final state:\n{state}")
}

pub fn listing_directory(path: &str) -> String {
    format!("📂 Listing '{path}' via subprocess tool server...")
}

pub fn step_failed(step: &str, err: &str) -> String {
    format!("❌ {step} failed: {err}")
}

pub fn setup_failed(stage: &str, err: &str) -> String {
    format!("❌ {stage}: {err}")
}
