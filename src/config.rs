use crate::error::{BadEnvVarSnafu, ParsePoolSizeSnafu, ParsePortSnafu, RosterResult};
use dotenvy::var;
use secrecy::{ExposeSecret, SecretString};
use snafu::ResultExt;
use std::sync::Arc;

const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 15;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
    server_ip: String,
}

impl RuntimeConfiguration {
    pub fn new() -> RosterResult<Self> {
        Self::from_lookup(var)
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<String, dotenvy::Error>,
    ) -> RosterResult<Self> {
        let server_ip = lookup("ROSTER_SERVER_IP").unwrap_or_else(|_| DEFAULT_SERVER_IP.to_string());

        Ok(Self {
            db_config: Arc::new(DbConfig::from_lookup(lookup)?),
            server_ip,
        })
    }

    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

#[derive(Debug)]
pub struct DbConfig {
    user: String,
    password: SecretString,
    path: String,
    port: u16,
    database: String,
    max_connections: u32,
}

impl DbConfig {
    fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<String, dotenvy::Error>,
    ) -> RosterResult<Self> {
        let get_env_var = |name| lookup(name).context(BadEnvVarSnafu { name });

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse::<u32>().context(ParsePoolSizeSnafu)?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            user: get_env_var("DB_USER")?,
            password: SecretString::from(get_env_var("DB_PASSWORD")?),
            path: get_env_var("DB_PATH")?,
            port: get_env_var("DB_PORT")?.parse().context(ParsePortSnafu)?,
            database: get_env_var("DB_NAME")?,
            max_connections,
        })
    }

    pub fn get_db_path(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user,
            self.password.expose_secret(),
            self.path,
            self.port,
            self.database
        )
    }

    pub const fn max_connections(&self) -> u32 {
        self.max_connections
    }
}
