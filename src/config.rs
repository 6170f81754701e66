use std::env;

/// Local database used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CURRENT_USER_ID: i32 = 1;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Identity the favorites routes act on.
    pub current_user_id: i32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .map(|url| normalize_database_url(&url))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let current_user_id = match lookup("CURRENT_USER_ID") {
            Some(raw) => raw
                .parse::<i32>()
                .map_err(|e| anyhow::anyhow!("invalid CURRENT_USER_ID {raw:?}: {e}"))?,
            None => DEFAULT_CURRENT_USER_ID,
        };
        Ok(Self {
            database_url,
            host,
            port,
            current_user_id,
        })
    }
}

/// Hosting providers hand out `postgres://` URLs; rewrite them to the
/// `postgresql://` scheme.
pub fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{rest}"),
        None => url.to_string(),
    }
}
