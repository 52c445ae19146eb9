use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub redis_url: String,
    pub jwt: JwtConfig,
    /// Shared secret expected in the `x-api-key` header.
    pub api_key: String,
    pub cache_ttl_seconds: u64,
    pub notification_file: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let redis_url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".into());
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(30),
        };
        let api_key = std::env::var("API_KEY")?;
        let cache_ttl_seconds = std::env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(300);
        let notification_file =
            std::env::var("NOTIFICATION_FILE").unwrap_or_else(|_| "log.txt".into());
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);
        Ok(Self {
            database_url,
            redis_url,
            jwt,
            api_key,
            cache_ttl_seconds,
            notification_file,
            host,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test touching these process-wide variables; keep it that way,
    // env mutation is not thread safe across tests.
    #[test]
    fn from_env_requires_secrets_and_applies_defaults() {
        std::env::set_var("DATABASE_URL", "postgres://postgres@localhost/userbase");
        std::env::set_var("JWT_SECRET", "env-secret");
        std::env::set_var("API_KEY", "env-api-key");
        for var in [
            "REDIS_URL",
            "JWT_TTL_MINUTES",
            "CACHE_TTL_SECONDS",
            "NOTIFICATION_FILE",
            "APP_HOST",
            "APP_PORT",
        ] {
            std::env::remove_var(var);
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.jwt.ttl_minutes, 30);
        assert_eq!(config.cache_ttl_seconds, 300);
        assert_eq!(config.notification_file, "log.txt");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);

        std::env::remove_var("JWT_SECRET");
        assert!(AppConfig::from_env().is_err());
    }
}
