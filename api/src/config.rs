use std::env;

use crate::app::seed_config::{DEFAULT_FAN_OUT_COUNT, DEFAULT_SAMPLE_COUNT};
use crate::app::SeedSettings;

/// Deployment profile the process was started under
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Profile {
    Production,
    /// Any non-production profile, keeping its name (`dev`, `local`, `test`, ...)
    Development(String),
}

impl Profile {
    /// Synthetic data is only ever written outside production
    pub fn allows_seeding(&self) -> bool {
        !matches!(self, Profile::Production)
    }

    /// Resolve the `APP_PROFILE` value. Unset means `dev`; a value that
    /// cannot be parsed is treated as production so seeding stays off.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            None => Profile::Development("dev".to_string()),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(
                    "Rejected APP_PROFILE value {:?} ({}), running as prod",
                    raw,
                    e
                );
                Profile::Production
            }),
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Profile::Production => write!(f, "prod"),
            Profile::Development(name) => write!(f, "{}", name),
        }
    }
}

impl std::str::FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        match name.as_str() {
            "" => Err("Profile name must not be empty".to_string()),
            "prod" | "production" => Ok(Profile::Production),
            _ => Ok(Profile::Development(name)),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub profile: Profile,
    pub port: u16,
    pub seed: SeedSettings,
    /// Fixed RNG seed for reproducible seeding; entropy is used when unset
    pub seed_rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            profile: Profile::from_env_value(env::var("APP_PROFILE").ok().as_deref()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(9040),
            seed: SeedSettings {
                sample_count: env::var("SEED_SAMPLE_COUNT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_SAMPLE_COUNT),
                fan_out_count: env::var("SEED_FAN_OUT_COUNT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_FAN_OUT_COUNT),
            },
            seed_rng_seed: env::var("SEED_RNG_SEED")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }
}
