//! Validation utilities.

use std::fmt::Write;

use dogfood_config::Config;
use dogfood_models::RepositoryPath;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        let _ = write!(error, "\n  - Missing env. var.: {}", name);
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, value: &str) {
        let _ = write!(error, "\n  - Invalid env. var.: {} ('{}')", name, value);
    }

    let mut error = String::new();

    if config.api.github.token.is_empty() {
        _missing(&mut error, "GITHUB_TOKEN");
    }

    if config.repository.is_empty() {
        _missing(&mut error, "GITHUB_REPOSITORY");
    } else if RepositoryPath::new(&config.repository).is_err() {
        _invalid(&mut error, "GITHUB_REPOSITORY", &config.repository);
    }

    if config.event.name.is_empty() {
        _missing(&mut error, "GITHUB_EVENT_NAME");
    }
    if config.event.path.is_empty() {
        _missing(&mut error, "GITHUB_EVENT_PATH");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
