//! # igf-config
//!
//! Runtime settings for the catalog server.
//!
//! Values come from built-in defaults overlaid by the process environment.
//! An optional `.env` file in the working directory is loaded first, so local
//! development can keep `MONGO_URI` out of the shell history.
//!
//! | env var            | default    |
//! |--------------------|------------|
//! | `IP`               | `0.0.0.0`  |
//! | `PORT`             | `5000`     |
//! | `STORE`            | `mongo`    |
//! | `MONGO_URI`        | (none)     |
//! | `MONGO_DBNAME`     | `IGF_DB`   |
//! | `MONGO_COLLECTION` | `IGF_COLL` |

use std::fmt;
use std::str::FromStr;

use config::{Config, Environment};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("unknown store backend {0:?} (expected \"mongo\" or \"memory\")")]
    UnknownStore(String),

    #[error("MONGO_URI must be set when STORE=mongo")]
    MissingMongoUri,
}

/// Which `DocumentStore` plugin the binary should assemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::UnknownStore(other.to_string())),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mongo => f.write_str("mongo"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Raw shape read from the environment. Keys are the lowercased env var names.
#[derive(Debug, Deserialize)]
struct RawSettings {
    ip: String,
    port: u16,
    store: String,
    mongo_uri: Option<String>,
    mongo_dbname: String,
    mongo_collection: String,
}

#[derive(Debug)]
pub struct MongoSettings {
    pub uri: SecretString,
    pub database: String,
    pub collection: String,
}

#[derive(Debug)]
pub struct Settings {
    pub ip: String,
    pub port: u16,
    pub store: StoreBackend,
    /// Present whenever `store` is `Mongo`.
    pub mongo: Option<MongoSettings>,
}

impl Settings {
    /// Loads `.env` (if any) and then reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(e) => debug!("No .env file loaded: {e}"),
        }
        Self::from_source(Environment::default().try_parsing(true))
    }

    /// Builds settings from defaults overlaid by `source`.
    pub fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let raw: RawSettings = Config::builder()
            .set_default("ip", "0.0.0.0")?
            .set_default("port", 5000)?
            .set_default("store", "mongo")?
            .set_default("mongo_dbname", "IGF_DB")?
            .set_default("mongo_collection", "IGF_COLL")?
            .add_source(source)
            .build()?
            .try_deserialize()?;

        let store: StoreBackend = raw.store.parse()?;
        let mongo = match (store, raw.mongo_uri) {
            (StoreBackend::Mongo, None) => return Err(ConfigError::MissingMongoUri),
            (_, Some(uri)) => Some(MongoSettings {
                uri: SecretString::from(uri),
                database: raw.mongo_dbname,
                collection: raw.mongo_collection,
            }),
            (StoreBackend::Memory, None) => None,
        };

        Ok(Self {
            ip: raw.ip,
            port: raw.port,
            store,
            mongo,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default().try_parsing(true).source(Some(source))
    }

    #[test]
    fn test_defaults_with_mongo_uri() {
        let settings = Settings::from_source(env(&[("MONGO_URI", "mongodb://localhost:27017")])).unwrap();

        assert_eq!(settings.bind_address(), "0.0.0.0:5000");
        assert_eq!(settings.store, StoreBackend::Mongo);
        let mongo = settings.mongo.unwrap();
        assert_eq!(mongo.uri.expose_secret(), "mongodb://localhost:27017");
        assert_eq!(mongo.database, "IGF_DB");
        assert_eq!(mongo.collection, "IGF_COLL");
    }

    #[test]
    fn test_mongo_without_uri_is_rejected() {
        let err = Settings::from_source(env(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingMongoUri));
    }

    #[test]
    fn test_memory_store_and_overrides() {
        let settings = Settings::from_source(env(&[
            ("STORE", "memory"),
            ("PORT", "8080"),
            ("IP", "127.0.0.1"),
        ]))
        .unwrap();

        assert_eq!(settings.store, StoreBackend::Memory);
        assert!(settings.mongo.is_none());
        assert_eq!(settings.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_unknown_store_is_rejected() {
        let err = Settings::from_source(env(&[("STORE", "postgres")])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownStore(s) if s == "postgres"));
    }
}
