//! Auth.

use std::time::Duration;

use dogfood_config::Config;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    ClientBuilder,
};

use crate::errors::GitHubError;

const ACCEPT_HEADER: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";

/// Get an authenticated GitHub client builder.
pub fn get_authenticated_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let token = &config.api.github.token;
    if token.is_empty() {
        return get_anonymous_client_builder(config);
    }

    let mut headers = default_headers();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            GitHubError::InvalidHeaderError {
                name: "authorization",
                source: e,
            }
        })?,
    );

    Ok(base_client_builder(config).default_headers(headers))
}

/// Get anonymous GitHub client builder.
pub fn get_anonymous_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    Ok(base_client_builder(config).default_headers(default_headers()))
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!(
        "{}{}",
        config.api.github.root_url.trim_end_matches('/'),
        path.into()
    )
}

fn base_client_builder(config: &Config) -> ClientBuilder {
    const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("dogfood/{APP_VERSION}"))
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));
    headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
    headers
}
