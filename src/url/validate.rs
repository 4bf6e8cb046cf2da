use crate::UrlError;
use url::Url;

/// Validates that a target URL is absolute, with both a scheme and a host
///
/// This runs before any network activity; a URL that fails here is never
/// fetched.
///
/// # Examples
///
/// ```
/// use sumi_lens::url::validate_target;
///
/// assert!(validate_target("https://www.google.com").is_ok());
/// assert!(validate_target("htpp//google.com").is_err());
/// ```
pub fn validate_target(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse {
        url: url_str.to_string(),
        message: e.to_string(),
    })?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::MissingHost(url_str.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_url() {
        let url = validate_target("https://www.google.com").unwrap();
        assert_eq!(url.host_str(), Some("www.google.com"));
    }

    #[test]
    fn test_missing_scheme_separator() {
        assert!(matches!(
            validate_target("htpp//google.com"),
            Err(UrlError::Parse { .. })
        ));
    }

    #[test]
    fn test_no_host() {
        assert!(validate_target("http://").is_err());
    }

    #[test]
    fn test_no_scheme() {
        assert!(validate_target("://example.com").is_err());
    }

    #[test]
    fn test_scheme_without_host() {
        assert_eq!(
            validate_target("mailto:someone@example.com"),
            Err(UrlError::MissingHost("mailto:someone@example.com".to_string()))
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(validate_target("").is_err());
    }
}
