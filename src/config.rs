use std::net::IpAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub db_idle_timeout: Duration,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("TEAMDIR_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid TEAMDIR_HOST: {e}"))?;

        let port: u16 = env_or("TEAMDIR_PORT", "5001")
            .parse()
            .map_err(|e| format!("Invalid TEAMDIR_PORT: {e}"))?;

        let max_body_size: usize = env_or("TEAMDIR_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid TEAMDIR_MAX_BODY_SIZE: {e}"))?;

        let db_max_connections: u32 = env_or("TEAMDIR_DB_MAX_CONNECTIONS", "5")
            .parse()
            .map_err(|e| format!("Invalid TEAMDIR_DB_MAX_CONNECTIONS: {e}"))?;

        let acquire_secs: u64 = env_or("TEAMDIR_DB_ACQUIRE_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| format!("Invalid TEAMDIR_DB_ACQUIRE_TIMEOUT_SECS: {e}"))?;

        let idle_secs: u64 = env_or("TEAMDIR_DB_IDLE_TIMEOUT_SECS", "10")
            .parse()
            .map_err(|e| format!("Invalid TEAMDIR_DB_IDLE_TIMEOUT_SECS: {e}"))?;

        let log_level = env_or("TEAMDIR_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            max_body_size,
            db_max_connections,
            db_acquire_timeout: Duration::from_secs(acquire_secs),
            db_idle_timeout: Duration::from_secs(idle_secs),
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
