//! Load configuration from environment variables (after `.env`, if present).

use crate::config::types::*;
use crate::error::ConfigError;
use std::net::{IpAddr, SocketAddr};

/// Read config from the process environment.
pub fn from_env() -> Result<AppConfig, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build config from any key lookup. `DB_URI` wins over `DATABASE_URL`.
pub fn from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let database_url = get("DB_URI")
        .or_else(|| get("DATABASE_URL"))
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

    let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.into());
    let ip: IpAddr = host
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key: "HOST", value: host.clone() })?;
    let port = match get("PORT") {
        Some(v) => v
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: v })?,
        None => DEFAULT_PORT,
    };

    let max_connections = match get("DB_MAX_CONNECTIONS") {
        Some(v) => match v.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(ConfigError::InvalidValue {
                    key: "DB_MAX_CONNECTIONS",
                    value: v,
                })
            }
        },
        None => DEFAULT_MAX_CONNECTIONS,
    };

    let compact = get("JSON_COMPACT").map(|v| v.to_ascii_lowercase());
    let json_format = match compact.as_deref() {
        None | Some("0") | Some("false") | Some("no") => JsonFormat::Pretty,
        Some("1") | Some("true") | Some("yes") => JsonFormat::Compact,
        Some(other) => {
            return Err(ConfigError::InvalidValue {
                key: "JSON_COMPACT",
                value: other.to_string(),
            })
        }
    };

    Ok(AppConfig {
        database_url,
        bind_addr: SocketAddr::new(ip, port),
        max_connections,
        json_format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn db_uri_takes_precedence() {
        let cfg = load(&[("DATABASE_URL", "sqlite://other.db"), ("DB_URI", "sqlite::memory:")]).unwrap();
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert!(cfg.is_in_memory());
    }

    #[test]
    fn host_port_and_format() {
        let cfg = load(&[("HOST", "0.0.0.0"), ("PORT", "8080"), ("JSON_COMPACT", "TRUE")]).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(cfg.json_format, JsonFormat::Compact);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert!(matches!(
            load(&[("PORT", "http")]),
            Err(ConfigError::InvalidValue { key: "PORT", .. })
        ));
        assert!(matches!(
            load(&[("DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::InvalidValue { key: "DB_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            load(&[("JSON_COMPACT", "maybe")]),
            Err(ConfigError::InvalidValue { key: "JSON_COMPACT", .. })
        ));
    }
}
