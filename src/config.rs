// src/config.rs
use std::env;
use thiserror::Error;

use crate::domain::page::services::excerpt::DEFAULT_WORD_LIMIT;

/// Deployment-level settings for the page extension. The URL prefix is
/// overridable so segments can live under a holder path rather than the
/// site root.
#[derive(Clone, Debug)]
pub struct PageConfig {
    url_prefix: String,
    excerpt_word_limit: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_url_prefix() -> String {
    "/".into()
}

impl PageConfig {
    /// Build configuration from environment variables, falling back to the
    /// site-root prefix and the standard excerpt length.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let url_prefix = env::var("PAGE_URL_PREFIX").unwrap_or_else(|_| default_url_prefix());

        let excerpt_word_limit = env::var("PAGE_EXCERPT_WORD_LIMIT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_WORD_LIMIT);

        Self::new(url_prefix, excerpt_word_limit)
    }

    pub fn new(
        url_prefix: impl Into<String>,
        excerpt_word_limit: usize,
    ) -> Result<Self, ConfigError> {
        let url_prefix = url_prefix.into();
        if !url_prefix.starts_with('/') {
            return Err(ConfigError::Invalid(
                "PAGE_URL_PREFIX must be a site-relative path starting with '/'".into(),
            ));
        }
        if excerpt_word_limit == 0 {
            return Err(ConfigError::Invalid(
                "PAGE_EXCERPT_WORD_LIMIT must be at least 1".into(),
            ));
        }

        Ok(Self {
            url_prefix,
            excerpt_word_limit,
        })
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    pub fn excerpt_word_limit(&self) -> usize {
        self.excerpt_word_limit
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            url_prefix: default_url_prefix(),
            excerpt_word_limit: DEFAULT_WORD_LIMIT,
        }
    }
}
