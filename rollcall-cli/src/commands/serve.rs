//! HTTP server command
//!
//! Connects to Postgres, verifies the connection, then serves the
//! student routes until Ctrl+C or SIGTERM.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use rollcall_server::config::{Config, DEFAULT_DB_PORT, DEFAULT_LISTEN_PORT};
use rollcall_server::db::{create_pool, ping};
use rollcall_server::{run_server, PgStudentStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = DEFAULT_DB_PORT)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "students")]
    pub db_name: String,

    /// Port to listen on
    #[arg(long, short = 'p', env = "APP_PORT", default_value_t = DEFAULT_LISTEN_PORT)]
    pub port: u16,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl From<&ServeArgs> for Config {
    fn from(args: &ServeArgs) -> Self {
        Self {
            host: args.db_host.clone(),
            port: args.db_port,
            user: args.db_user.clone(),
            password: args.db_password.clone(),
            database: args.db_name.clone(),
            listen_port: args.port,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = Config::from(&args);
    tracing::info!(database = %config.database_url(), "Connecting to database");

    let pool = create_pool(&config)
        .await
        .context("Failed to connect to database")?;
    ping(&pool)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    let server_config = ServerConfig {
        bind_addr: config.bind_addr(),
        cors_permissive: args.cors_permissive,
    };

    run_server(Arc::new(PgStudentStore::new(pool)), server_config)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn flags_map_onto_config() {
        let harness = Harness::parse_from([
            "rollcall",
            "--db-host",
            "db.internal",
            "--db-port",
            "6543",
            "--db-user",
            "registrar",
            "--db-password",
            "hunter2",
            "--db-name",
            "school",
            "-p",
            "9000",
        ]);

        let config = Config::from(&harness.serve);
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 6543);
        assert_eq!(config.user, "registrar");
        assert_eq!(config.password, "hunter2");
        assert_eq!(config.database, "school");
        assert_eq!(config.listen_port, 9000);
        assert_eq!(config.bind_addr().port(), 9000);
    }
}
