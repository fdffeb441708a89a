// Bundled filesystem tool server, so a default scribe setup needs no Node.js.
// Speaks MCP over stdio: stdout belongs to the protocol, diagnostics go to stderr.

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let mut arguments = rust_mcp_filesystem::cli::CommandArguments::parse();
    if let Err(err) = arguments.validate() {
        eprintln!("Error: {err}");
        return ExitCode::from(2);
    };

    if let Err(error) = rust_mcp_filesystem::server::start_server(arguments).await {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
