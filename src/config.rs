use crate::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    /// Install the default store catalog at startup
    pub seed_catalog: bool,
    /// Create the demo account at startup if it does not exist
    pub seed_demo_user: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            seed_catalog: bool_var("SEED_CATALOG", true)?,
            seed_demo_user: bool_var("SEED_DEMO_USER", true)?,
        })
    }
}

fn bool_var(var: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(var) {
        Ok(value) => parse_bool(var, &value),
        Err(_) => Ok(default),
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a boolean, got {:?}", value),
        }),
    }
}
