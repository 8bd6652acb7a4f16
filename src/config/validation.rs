use crate::config::CrawlConfig;
use crate::ConfigError;
use url::Url;

/// Validates a crawl configuration
///
/// Checks, in order:
/// 1. The starting URL is non-empty
/// 2. The starting URL parses as an absolute URL
/// 3. Its scheme is `http` or `https`
/// 4. It has a host
/// 5. Concurrency is at least 1
///
/// # Arguments
///
/// * `config` - The configuration to validate
///
/// # Returns
///
/// * `Ok(())` - The configuration is usable
/// * `Err(ConfigError)` - The first rule that failed
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.start_url.trim().is_empty() {
        return Err(ConfigError::MissingStartUrl);
    }

    let url = Url::parse(&config.start_url).map_err(|e| ConfigError::InvalidStartUrl {
        url: config.start_url.clone(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::MissingScheme(config.start_url.clone()));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::MissingHost(config.start_url.clone()));
    }

    if config.concurrency == 0 {
        return Err(ConfigError::InvalidConcurrency);
    }

    Ok(())
}
