//! Service configuration
//!
//! One struct carries both the store coordinates and the listen port.
//! The CLI fills it from flags and environment variables:
//! - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`
//! - `APP_PORT`: HTTP listen port (default: 8080)
//!
//! Host, port, user, password and database always come from `Config`;
//! an empty password is sent as empty rather than falling back to
//! `PGPASSWORD`. Other libpq variables such as `PGSSLMODE`,
//! `PGSSLROOTCERT` and `PGAPPNAME` are still honored by the driver.

use std::fmt;
use std::net::SocketAddr;

use sqlx::postgres::PgConnectOptions;

/// Default HTTP listen port
pub const DEFAULT_LISTEN_PORT: u16 = 8080;

/// Default Postgres port
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Store and listener configuration
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub listen_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_DB_PORT,
            user: "postgres".to_string(),
            password: String::new(),
            database: "students".to_string(),
            listen_port: DEFAULT_LISTEN_PORT,
        }
    }
}

impl Config {
    /// Connection options for the store.
    ///
    /// Built field by field so passwords never need URL escaping.
    /// `~/.pgpass` is not consulted.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new_without_pgpass()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    /// Connection string with the password redacted, for logs.
    pub fn database_url(&self) -> String {
        let secret = if self.password.is_empty() { "" } else { ":***" };
        format!(
            "postgres://{}{}@{}:{}/{}",
            self.user, secret, self.host, self.port, self.database
        )
    }

    /// Address the HTTP server binds to (all interfaces).
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.listen_port))
    }
}

// Password is always redacted.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("listen_port", &self.listen_port)
            .finish()
    }
}
