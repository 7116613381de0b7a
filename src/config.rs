//! 環境変数からのアプリケーション設定

use std::env;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("DATABASE_URL is required when BOOK_STORE=postgres")]
    MissingDatabaseUrl,
}

/// 書籍ストアのバックエンド
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    /// コピーオンライトのインメモリストア
    Memory { seed_books: bool },
    Postgres {
        database_url: String,
        max_connections: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub cors_allowed_origin: String,
}

impl AppConfig {
    /// プロセスの環境変数から読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー検索関数から読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN")
            .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGIN.to_string());

        let store = match lookup("BOOK_STORE").as_deref() {
            None | Some("memory") => StoreBackend::Memory {
                seed_books: parse_or(&lookup, "SEED_BOOKS", true)?,
            },
            Some("postgres") => StoreBackend::Postgres {
                database_url: lookup("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?,
                max_connections: parse_or(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    DEFAULT_MAX_CONNECTIONS,
                )?,
            },
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "BOOK_STORE",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            host,
            port,
            store,
            cors_allowed_origin,
        })
    }

    /// バインドするアドレス（host:port）
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.store, StoreBackend::Memory { seed_books: true });
        assert_eq!(config.cors_allowed_origin, "http://localhost:5173");
    }

    #[test]
    fn test_memory_without_seed() {
        let config = config_from(&[("SEED_BOOKS", "false")]).unwrap();
        assert_eq!(config.store, StoreBackend::Memory { seed_books: false });
    }

    #[test]
    fn test_postgres_backend() {
        let config = config_from(&[
            ("BOOK_STORE", "postgres"),
            ("DATABASE_URL", "postgres://localhost/books"),
            ("DATABASE_MAX_CONNECTIONS", "10"),
        ])
        .unwrap();

        assert_eq!(
            config.store,
            StoreBackend::Postgres {
                database_url: "postgres://localhost/books".to_string(),
                max_connections: 10,
            }
        );
    }

    #[test]
    fn test_postgres_requires_database_url() {
        let err = config_from(&[("BOOK_STORE", "postgres")]).unwrap_err();
        assert_eq!(err, ConfigError::MissingDatabaseUrl);
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "PORT",
                value: "http".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_backend() {
        let err = config_from(&[("BOOK_STORE", "redis")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "BOOK_STORE",
                ..
            }
        ));
    }
}
