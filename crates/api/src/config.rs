use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Maximum database connections in the pool.
    pub db_max_connections: u32,
    /// Minimum database connections in the pool.
    pub db_min_connections: u32,
    /// Session token signing secret.
    pub session_secret: String,
    /// Lifetime of an admin session.
    pub session_ttl: chrono::Duration,
    /// Directory under which the image bucket lives.
    pub media_root: PathBuf,
    /// Name of the image bucket.
    pub media_bucket: String,
    /// Largest accepted upload body.
    pub max_upload_bytes: usize,
    /// Public origin of the site, used for image URLs and the sitemap.
    pub site_url: String,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value `{value}`")]
    Invalid { name: &'static str, value: String },
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn or_default(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

/// Session lifetime from a whole number of hours; must be positive and
/// representable.
fn session_ttl(hours: i64) -> Result<chrono::Duration, ConfigError> {
    chrono::Duration::try_hours(hours)
        .filter(|ttl| *ttl > chrono::Duration::zero())
        .ok_or_else(|| ConfigError::Invalid {
            name: "SESSION_TTL_HOURS",
            value: hours.to_string(),
        })
}

/// Public origin of the site, without a trailing slash.
fn site_url(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    let is_http = trimmed.starts_with("https://") || trimmed.starts_with("http://");
    if !is_http || axum::http::HeaderValue::from_str(trimmed).is_err() {
        return Err(ConfigError::Invalid {
            name: "SITE_URL",
            value: value.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

impl AppConfig {
    /// Load configuration from environment variables with defaults for the
    /// optional ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: or_default("HOST", "0.0.0.0"),
            port: parsed("PORT", 3030)?,
            database_url: required("DATABASE_URL")?,
            db_max_connections: parsed("DB_MAX_CONNECTIONS", 20)?,
            db_min_connections: parsed("DB_MIN_CONNECTIONS", 1)?,
            session_secret: required("SESSION_SECRET")?,
            session_ttl: session_ttl(parsed("SESSION_TTL_HOURS", 12)?)?,
            media_root: PathBuf::from(or_default("MEDIA_ROOT", "./media")),
            media_bucket: or_default("MEDIA_BUCKET", "site-images"),
            max_upload_bytes: parsed("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            site_url: site_url(&or_default("SITE_URL", "https://nounstudio.dz"))?,
            log_level: or_default("LOG_LEVEL", "info"),
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
impl AppConfig {
    /// Configuration for router tests; no environment involved.
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            database_url: "postgres://localhost/studio_test".into(),
            db_max_connections: 1,
            db_min_connections: 1,
            session_secret: "router-test-secret".into(),
            session_ttl: chrono::Duration::hours(12),
            media_root: std::env::temp_dir(),
            media_bucket: "site-images".into(),
            max_upload_bytes: 1024 * 1024,
            site_url: "https://nounstudio.dz".into(),
            log_level: "debug".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ttl_must_be_positive_and_bounded() {
        assert_eq!(session_ttl(12).unwrap(), chrono::Duration::hours(12));
        for hours in [0, -3, i64::MAX] {
            let err = session_ttl(hours).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { name: "SESSION_TTL_HOURS", .. }));
        }
    }

    #[test]
    fn site_url_is_an_http_origin() {
        assert_eq!(site_url("https://nounstudio.dz/").unwrap(), "https://nounstudio.dz");
        assert!(site_url("nounstudio.dz").is_err());
        assert!(site_url("*").is_err());
        assert!(site_url("https://bad\nhost").is_err());
    }
}
