//! Print the GraphQL schema definition

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Arguments for the schema command
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Write the schema to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run_schema(args: SchemaArgs) -> Result<()> {
    let sdl = usergql_server::graphql::sdl();

    match args.output {
        Some(path) => {
            std::fs::write(&path, &sdl)
                .with_context(|| format!("Failed to write schema to {}", path.display()))?;
            tracing::info!("Wrote schema to {}", path.display());
        }
        None => print!("{}", sdl),
    }

    Ok(())
}
