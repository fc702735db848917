use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, num::NonZeroU32, str::FromStr};

use crate::entities::skill::VerificationPolicy;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_json: bool,

    /// Distinct endorsements that verify a skill; unset keeps verification manual.
    #[serde(default)]
    pub skill_verification_endorsements: Option<u32>,

    /// Operation script replayed by the binary when no path is given on the command line.
    #[serde(default)]
    pub script_path: Option<String>,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "ChainedIn-Registry".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            env: default_env(),
            name: default_name(),
            log_level: default_log_level(),
            log_json: false,
            skill_verification_endorsements: None,
            script_path: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .ignore_empty(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.log_level.trim().is_empty() {
            errors.push("LOG_LEVEL cannot be empty");
        }
        if self.skill_verification_endorsements == Some(0) {
            errors.push("SKILL_VERIFICATION_ENDORSEMENTS must be at least 1 when set");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn verification_policy(&self) -> VerificationPolicy {
        self.skill_verification_endorsements
            .and_then(NonZeroU32::new)
            .map(VerificationPolicy::Endorsements)
            .unwrap_or_default()
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_case_insensitively() {
        assert_eq!(AppEnvironment::from_str("Production").unwrap(), AppEnvironment::Production);
        assert!(AppEnvironment::from_str("staging").is_err());
    }

    #[test]
    fn zero_endorsement_threshold_is_rejected() {
        let config = AppConfig {
            skill_verification_endorsements: Some(0),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn verification_policy_follows_threshold() {
        assert_eq!(AppConfig::default().verification_policy(), VerificationPolicy::Manual);

        let config = AppConfig {
            skill_verification_endorsements: Some(3),
            ..AppConfig::default()
        };
        assert_eq!(
            config.verification_policy(),
            VerificationPolicy::Endorsements(NonZeroU32::new(3).unwrap())
        );
    }
}
