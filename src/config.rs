use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Unset means the service runs on fallback data only.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub cors_origins: Vec<String>,
    /// Serve fallback data when the database fails instead of an error.
    pub mock_fallback: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            db_max_connections: 10,
            db_acquire_timeout: Duration::from_secs(5),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            max_body_size: 1_048_576,
            cors_origins: Vec::new(),
            mock_fallback: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let db_max_connections: u32 = env_or("PORTAL_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid PORTAL_DB_MAX_CONNECTIONS: {e}"))?;

        let db_acquire_timeout: u64 = env_or("PORTAL_DB_ACQUIRE_TIMEOUT_SECS", "5")
            .parse()
            .map_err(|e| format!("Invalid PORTAL_DB_ACQUIRE_TIMEOUT_SECS: {e}"))?;

        let host: IpAddr = env_or("PORTAL_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PORTAL_HOST: {e}"))?;

        let port: u16 = env_or("PORTAL_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid PORTAL_PORT: {e}"))?;

        let max_body_size: usize = env_or("PORTAL_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid PORTAL_MAX_BODY_SIZE: {e}"))?;

        let cors_origins: Vec<String> = env_or("PORTAL_CORS_ORIGINS", "")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let mock_fallback = match env_or("PORTAL_MOCK_FALLBACK", "true").to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => true,
            "false" | "0" | "no" | "off" => false,
            other => return Err(format!("Invalid PORTAL_MOCK_FALLBACK: {other}")),
        };

        let log_level = env_or("PORTAL_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            db_max_connections,
            db_acquire_timeout: Duration::from_secs(db_acquire_timeout),
            host,
            port,
            max_body_size,
            cors_origins,
            mock_fallback,
            log_level,
        })
    }
}
