//! HTTP server command
//!
//! Builds the store (MySQL pool or in-memory table), wraps it in the
//! GraphQL schema and serves until Ctrl+C / SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use usergql_server::db::{create_pool, MemoryUserStore, MySqlUserStore, UserStore};
use usergql_server::{build_schema, run_server, ServerConfig, StoreConfig};

/// How long startup waits for the database before serving anyway.
const STARTUP_PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:4000", env = "USERGQL_BIND")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Serve from an in-process table instead of MySQL (data is lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    /// Full MySQL URL; overrides the individual --db-* settings
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// MySQL host [env: USERGQL_DB_HOST, default: localhost]
    #[arg(long)]
    pub db_host: Option<String>,

    /// MySQL port [env: USERGQL_DB_PORT, default: 3306]
    #[arg(long)]
    pub db_port: Option<u16>,

    /// MySQL user [env: USERGQL_DB_USER, default: root]
    #[arg(long)]
    pub db_user: Option<String>,

    /// MySQL password [env: USERGQL_DB_PASSWORD]
    #[arg(long)]
    pub db_password: Option<String>,

    /// MySQL database name [env: USERGQL_DB_NAME, default: gql-mysql]
    #[arg(long)]
    pub db_name: Option<String>,

    /// Maximum pooled connections [env: USERGQL_DB_MAX_CONNECTIONS, default: 10]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_connections: Option<u32>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of an environment-derived config.
    fn apply_overrides(&self, mut config: StoreConfig) -> StoreConfig {
        if let Some(host) = &self.db_host {
            config.host = host.clone();
        }
        if let Some(port) = self.db_port {
            config.port = port;
        }
        if let Some(user) = &self.db_user {
            config.user = user.clone();
        }
        if let Some(password) = &self.db_password {
            config.password = password.clone();
        }
        if let Some(name) = &self.db_name {
            config.database = name.clone();
        }
        if let Some(max) = self.max_connections {
            config.max_connections = max;
        }
        if let Some(url) = &self.database_url {
            config.url = Some(url.clone());
        }
        config
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
        }
    }
}

async fn mysql_store(args: &ServeArgs) -> Result<MySqlUserStore> {
    let env_config =
        StoreConfig::from_env().context("Invalid database settings in environment")?;
    let config = args.apply_overrides(env_config);
    tracing::info!(db = %config.display_target(), "Using MySQL store");

    let pool = create_pool(&config).context("Failed to create database pool")?;
    let store = MySqlUserStore::new(pool);

    match tokio::time::timeout(STARTUP_PING_TIMEOUT, store.ping()).await {
        Ok(Ok(())) => tracing::info!("Database reachable"),
        Ok(Err(err)) => tracing::warn!("Database not reachable yet, serving anyway: {}", err),
        Err(_) => tracing::warn!(
            "Database did not answer within {}s, serving anyway",
            STARTUP_PING_TIMEOUT.as_secs()
        ),
    }

    Ok(store)
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn UserStore> = if args.in_memory {
        tracing::warn!("Serving from an in-memory table; data is lost on exit");
        Arc::new(MemoryUserStore::new())
    } else {
        Arc::new(mysql_store(&args).await?)
    };

    let schema = build_schema(store);

    // Blocks until shutdown
    run_server(schema, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser, Debug)]
    struct Wrapper {
        #[command(flatten)]
        serve: ServeArgs,
    }

    fn parse(args: &[&str]) -> ServeArgs {
        let mut argv = vec!["serve"];
        argv.extend_from_slice(args);
        Wrapper::try_parse_from(argv).expect("valid args").serve
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(&[
            "--db-host",
            "db.internal",
            "--db-port",
            "3307",
            "--db-user",
            "app",
            "--db-password",
            "pw",
            "--db-name",
            "users",
            "--max-connections",
            "3",
        ]);
        let base = StoreConfig {
            host: "from-env".into(),
            ..StoreConfig::default()
        };

        let config = args.apply_overrides(base);
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 3307);
        assert_eq!(config.user, "app");
        assert_eq!(config.password, "pw");
        assert_eq!(config.database, "users");
        assert_eq!(config.max_connections, 3);
    }

    #[test]
    fn unset_flags_keep_environment_values() {
        let args = ServeArgs {
            bind: "127.0.0.1:4000".parse().unwrap(),
            cors_permissive: false,
            in_memory: false,
            database_url: None,
            db_host: None,
            db_port: None,
            db_user: None,
            db_password: None,
            db_name: None,
            max_connections: None,
        };
        let base = StoreConfig {
            host: "from-env".into(),
            port: 3310,
            ..StoreConfig::default()
        };

        let config = args.apply_overrides(base.clone());
        assert_eq!(config, base);
    }

    #[test]
    fn zero_max_connections_rejected() {
        let result = Wrapper::try_parse_from(["serve", "--max-connections", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn server_config_from_args() {
        let args = parse(&["--bind", "0.0.0.0:8080", "--cors-permissive", "--in-memory"]);
        let config = args.server_config();
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(config.cors_permissive);
        assert!(args.in_memory);
    }
}
