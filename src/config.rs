use std::str::FromStr;

use crate::{constants::*, models::OtpPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "memory" => Ok(Self::Memory),
            other => Err(anyhow::anyhow!("Unknown STORE_BACKEND: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MongoConfig {
    pub uri: String,
    pub db_name: String,
    pub min_pool_size: u32,
    pub max_pool_size: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub backend: StoreBackend,
    /// Only present for the mongodb backend
    pub mongo: Option<MongoConfig>,
    pub otp_policy: OtpPolicy,
}

impl AppConfig {
    /// Read the configuration from process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through the given key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT);
        let backend = match lookup("STORE_BACKEND") {
            Some(val) => val.parse::<StoreBackend>()?,
            None => StoreBackend::MongoDb,
        };
        let mongo = match backend {
            StoreBackend::MongoDb => {
                let uri = lookup("MONGODB_URI")
                    .ok_or_else(|| anyhow::anyhow!("MONGODB_URI not found in environment"))?;
                Some(MongoConfig {
                    uri,
                    db_name: lookup("MONGODB_DB_NAME").unwrap_or_else(|| DB_NAME.to_owned()),
                    min_pool_size: parse_or(&lookup, "MONGODB_MIN_POOL_SIZE", MONGO_MIN_POOL_SIZE),
                    max_pool_size: parse_or(&lookup, "MONGODB_MAX_POOL_SIZE", MONGO_MAX_POOL_SIZE),
                })
            }
            StoreBackend::Memory => None,
        };
        let otp_policy = OtpPolicy {
            single_use: parse_or(&lookup, "OTP_SINGLE_USE", false),
            ..OtpPolicy::default()
        };
        Ok(Self {
            port,
            backend,
            mongo,
            otp_policy,
        })
    }
}

// missing or unparsable values fall back to the default
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|val| val.trim().parse::<T>().ok())
        .unwrap_or(default)
}
