use std::env;

/// Runtime configuration for the movie catalog service
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database connection string (default: file-backed SQLite next to the binary)
    pub database_url: String,

    /// Address the HTTP server binds to (default: "127.0.0.1:9000")
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://movies.db?mode=rwc".to_string(),
            bind_addr: "127.0.0.1:9000".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(default.database_url),
            bind_addr: env::var("BIND_ADDR").unwrap_or(default.bind_addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.database_url, "sqlite://movies.db?mode=rwc");
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn test_from_env_overrides() {
        unsafe { env::set_var("BIND_ADDR", "127.0.0.1:9100") };
        let config = AppConfig::from_env();
        unsafe { env::remove_var("BIND_ADDR") };
        assert_eq!(config.bind_addr, "127.0.0.1:9100");
    }
}
