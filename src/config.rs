use std::env;
use std::path::PathBuf;

use crate::services::pricing_service::DEFAULT_BUDGET_CAP_EUR;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DATA_DIR: &str = "data";
const DESTINATION_CITY: &str = "Lille";
const ENVIRONMENT: &str = "development";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub destination_city: String,
    pub environment: String,
    pub budget_cap: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            data_dir: PathBuf::from(DATA_DIR),
            destination_city: DESTINATION_CITY.to_string(),
            environment: ENVIRONMENT.to_string(),
            budget_cap: DEFAULT_BUDGET_CAP_EUR,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            data_dir: lookup("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            destination_city: lookup("DESTINATION_CITY")
                .filter(|city| !city.trim().is_empty())
                .unwrap_or(defaults.destination_city),
            environment: lookup("RUST_ENV").unwrap_or(defaults.environment),
            budget_cap: lookup("BUDGET_CAP_EUR")
                .and_then(|cap| cap.parse::<f64>().ok())
                .filter(|cap| cap.is_finite())
                .unwrap_or(defaults.budget_cap),
        }
    }
}
