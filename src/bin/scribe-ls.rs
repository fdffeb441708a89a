//! # scribe-ls
//!
//! Starts the listing tool server as a subprocess and prints its directory listing.

use anyhow::Result;
use scribe::interface::{cli, commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::parse();
    let (config, _guard) = cli::bootstrap(&cli)?;

    commands::list::handle_list(&config).await?;
    Ok(())
}
