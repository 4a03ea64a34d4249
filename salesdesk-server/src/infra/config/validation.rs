use axum::http::{HeaderName, HeaderValue, Method};
use thiserror::Error;

use super::models::{Config, CorsConfig};

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("database URL must not be empty")]
    EmptyDatabaseUrl,
    #[error("unsupported database URL '{url}': only sqlite: URLs are accepted")]
    UnsupportedDatabaseUrl { url: String },
    #[error("database pool needs at least one connection")]
    EmptyPool,
    #[error("server host must not be empty")]
    EmptyHost,
    #[error("invalid CORS configuration: {reason}")]
    InvalidCorsConfig { reason: String },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.server.host.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyHost);
    }

    let url = config.database.url.trim();
    if url.is_empty() {
        return Err(ConfigGuardRailError::EmptyDatabaseUrl);
    }
    if !url.starts_with("sqlite:") {
        return Err(ConfigGuardRailError::UnsupportedDatabaseUrl {
            url: url.to_string(),
        });
    }
    if config.database.max_connections == 0 {
        return Err(ConfigGuardRailError::EmptyPool);
    }

    validate_cors(&config.cors)?;

    if config.database.is_in_memory() {
        warnings.push_with_hint(
            "Using an in-memory database; all data is lost on shutdown",
            "Set DATABASE_URL to a sqlite:// file path to persist data",
        );
    }

    if !config.dev_mode && config.cors.allows_any_origin() {
        warnings.push_with_hint(
            "CORS accepts requests from any origin",
            "Set CORS_ALLOWED_ORIGINS to the web client's origin in production",
        );
    }

    Ok(warnings)
}

fn validate_cors(cors: &CorsConfig) -> Result<(), ConfigGuardRailError> {
    for origin in cors.allowed_origins.iter().filter(|o| o.trim() != "*") {
        HeaderValue::from_str(origin).map_err(|_| {
            ConfigGuardRailError::InvalidCorsConfig {
                reason: format!("invalid origin '{origin}'"),
            }
        })?;
    }

    for method in &cors.allowed_methods {
        Method::from_bytes(method.as_bytes()).map_err(|_| {
            ConfigGuardRailError::InvalidCorsConfig {
                reason: format!("invalid method '{method}'"),
            }
        })?;
    }

    for header in &cors.allowed_headers {
        HeaderName::from_bytes(header.as_bytes()).map_err(|_| {
            ConfigGuardRailError::InvalidCorsConfig {
                reason: format!("invalid header '{header}'"),
            }
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_with_cors_warning() {
        let warnings = apply_guard_rails(&Config::default()).unwrap();
        assert_eq!(warnings.items.len(), 1);
        assert!(warnings.items[0].message.contains("any origin"));
    }

    #[test]
    fn in_memory_database_is_flagged() {
        let mut config = Config::in_memory();
        config.dev_mode = true;
        let warnings = apply_guard_rails(&config).unwrap();
        assert_eq!(warnings.items.len(), 1);
        assert!(warnings.items[0].message.contains("in-memory"));
    }

    #[test]
    fn rejects_non_sqlite_urls() {
        let mut config = Config::default();
        config.database.url = "postgres://localhost/sales".into();
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::UnsupportedDatabaseUrl { .. })
        ));
    }

    #[test]
    fn rejects_malformed_cors_entries() {
        let mut config = Config::default();
        config.cors.allowed_methods = vec!["GE T".into()];
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::InvalidCorsConfig { .. })
        ));
    }
}
