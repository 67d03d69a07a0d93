//! Security configuration
//!
//! The secret key signs session cookies once a real sign-in flow exists.
//! It is held behind `secrecy::SecretString` so it never appears in debug
//! output or logs.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Security configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Application secret key
    #[serde(default = "default_secret_key")]
    pub secret_key: SecretString,
}

impl SecurityConfig {
    /// Validate security configuration
    ///
    /// The development default is acceptable outside production; in
    /// production the key must be supplied via the environment.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let key = self.secret_key.expose_secret();
        if key.is_empty() {
            return Err(ValidationError::MissingSecretKey);
        }
        if *environment == Environment::Production && key == DEV_SECRET_KEY {
            return Err(ValidationError::MissingSecretKey);
        }
        Ok(())
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            secret_key: default_secret_key(),
        }
    }
}

const DEV_SECRET_KEY: &str = "dev-only-secret";

fn default_secret_key() -> SecretString {
    SecretString::new(DEV_SECRET_KEY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_is_fine_in_development() {
        let config = SecurityConfig::default();
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn default_key_is_rejected_in_production() {
        let config = SecurityConfig::default();
        assert!(config.validate(&Environment::Production).is_err());
    }

    #[test]
    fn explicit_key_is_accepted_in_production() {
        let config = SecurityConfig {
            secret_key: SecretString::new("f3a9...real".to_string()),
        };
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn debug_output_does_not_leak_the_key() {
        let config = SecurityConfig::default();
        assert!(!format!("{:?}", config).contains(DEV_SECRET_KEY));
    }
}
