use crate::config::types::{AnalyserConfig, Config, OutboundConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

const MAX_WORKER_COUNT: usize = 1000;
const MAX_CONCURRENT_PAGES: usize = 64;
const MIN_TIMEOUT_MS: u64 = 100;
const MAX_REDIRECTS: usize = 20;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_analyser_config(&config.analyser)?;
    validate_outbound_config(&config.outbound)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates analyser configuration
fn validate_analyser_config(config: &AnalyserConfig) -> Result<(), ConfigError> {
    if config.worker_count < 1 || config.worker_count > MAX_WORKER_COUNT {
        return Err(ConfigError::Validation(format!(
            "worker_count must be between 1 and {}, got {}",
            MAX_WORKER_COUNT, config.worker_count
        )));
    }

    if config.max_concurrent_pages < 1 || config.max_concurrent_pages > MAX_CONCURRENT_PAGES {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_pages must be between 1 and {}, got {}",
            MAX_CONCURRENT_PAGES, config.max_concurrent_pages
        )));
    }

    Ok(())
}

/// Validates outbound client configuration
fn validate_outbound_config(config: &OutboundConfig) -> Result<(), ConfigError> {
    if config.connect_timeout < MIN_TIMEOUT_MS {
        return Err(ConfigError::Validation(format!(
            "connect_timeout must be >= {}ms, got {}ms",
            MIN_TIMEOUT_MS, config.connect_timeout
        )));
    }

    if config.request_timeout < MIN_TIMEOUT_MS {
        return Err(ConfigError::Validation(format!(
            "request_timeout must be >= {}ms, got {}ms",
            MIN_TIMEOUT_MS, config.request_timeout
        )));
    }

    if config.max_redirects > MAX_REDIRECTS {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be <= {}, got {}",
            MAX_REDIRECTS, config.max_redirects
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Name: non-empty, alphanumeric + hyphens only
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user agent name cannot be empty".to_string(),
        ));
    }

    if !config.name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ConfigError::Validation(format!(
            "user agent name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    if config.version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user agent version cannot be empty".to_string(),
        ));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    Ok(())
}
