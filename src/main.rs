//! # scribe
//!
//! Edit-file workflow: list, read, correct with the model, write back.

use anyhow::Result;
use scribe::interface::{cli, commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::parse();
    let (config, _guard) = cli::bootstrap(&cli)?;

    commands::edit::handle_edit(&config).await?;
    Ok(())
}
