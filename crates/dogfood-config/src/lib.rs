//! Config module.

use std::env;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct EventConfig {
    /// Name of the event which triggered the workflow.
    pub name: String,
    /// Path to the JSON payload of the event.
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Path to the step output file. Empty means stdout.
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Tool configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Repository path, as `owner/name`.
    pub repository: String,
    /// Event options.
    pub event: EventConfig,
    /// Output options.
    pub output: OutputConfig,
    /// Check run name to ignore when computing the checks status.
    pub exclude_job: String,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            api: ApiConfig {
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("DOGFOOD_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("GITHUB_API_URL", "https://api.github.com"),
                    token: env_to_str("GITHUB_TOKEN", ""),
                },
            },
            repository: env_to_str("GITHUB_REPOSITORY", ""),
            event: EventConfig {
                name: env_to_str("GITHUB_EVENT_NAME", ""),
                path: env_to_str("GITHUB_EVENT_PATH", ""),
            },
            output: OutputConfig {
                path: env_to_str("GITHUB_OUTPUT", ""),
            },
            exclude_job: env_to_str("DOGFOOD_EXCLUDE_JOB", ""),
            logging: LoggingConfig {
                use_bunyan: env_to_bool("DOGFOOD_LOGGING_USE_BUNYAN", false),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }

    /// Get the excluded check run name, if any.
    pub fn exclude_job(&self) -> Option<&str> {
        if self.exclude_job.is_empty() {
            None
        } else {
            Some(&self.exclude_job)
        }
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclude_job_empty_means_none() {
        let mut config = Config::from_env_no_version();

        config.exclude_job = String::new();
        assert_eq!(config.exclude_job(), None);

        config.exclude_job = "report-status".into();
        assert_eq!(config.exclude_job(), Some("report-status"));
    }

    #[test]
    fn env_values_are_kept_verbatim() {
        env::set_var("DOGFOOD_TEST_VERBATIM_VALUE", "fix\\nbranch");

        assert_eq!(env_to_str("DOGFOOD_TEST_VERBATIM_VALUE", ""), "fix\\nbranch");
        assert_eq!(env_to_str("DOGFOOD_TEST_UNSET_VALUE", "fallback"), "fallback");
    }
}
