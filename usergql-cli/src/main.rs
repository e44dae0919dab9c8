//! usergql CLI - GraphQL server for a MySQL `user` table
//!
//! Subcommands:
//! - `serve`: run the GraphQL HTTP endpoint
//! - `schema`: print the GraphQL schema (SDL)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "usergql",
    author,
    version,
    about = "GraphQL bridge over a MySQL user table",
    long_about = "Serve a GraphQL schema with users/user queries and addUser/updateUser/deleteUser \
                  mutations, each forwarded as a single parameterized statement to MySQL."
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the GraphQL HTTP server
    Serve(commands::serve::ServeArgs),
    /// Print the GraphQL schema definition
    Schema(commands::schema::SchemaArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before parsing so clap `env` fallbacks see it
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    config::log_loaded(&env_files);

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Schema(args) => commands::run_schema(args)?,
    }
    Ok(())
}
