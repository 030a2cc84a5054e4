//! Service configuration, read from the environment (and `.env` via dotenvy)

use std::time::Duration;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub port: u16,
    /// Live menu catalog endpoint; without one the static catalog is served
    pub menu_catalog_url: Option<String>,
    /// Upper bound on a single catalog fetch
    pub catalog_timeout: Duration,
    /// How long a fetched catalog stays cached
    pub catalog_cache_ttl: Duration,
    /// Background refresh period
    pub catalog_refresh: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            menu_catalog_url: None,
            catalog_timeout: Duration::from_millis(5000),
            catalog_cache_ttl: Duration::from_secs(300),
            catalog_refresh: Duration::from_secs(600),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable numbers keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let number = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            menu_catalog_url: lookup("MENU_CATALOG_URL")
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty()),
            catalog_timeout: number("CATALOG_TIMEOUT_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.catalog_timeout),
            catalog_cache_ttl: number("CATALOG_CACHE_TTL_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.catalog_cache_ttl),
            catalog_refresh: number("CATALOG_REFRESH_SECS")
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.catalog_refresh),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
