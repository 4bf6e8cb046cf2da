use serde::Deserialize;

/// Main configuration structure for Sumi-Lens
///
/// Every section is optional in the TOML file; missing sections fall back to
/// their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analyser: AnalyserConfig,
    #[serde(default)]
    pub outbound: OutboundConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
}

/// Analysis behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyserConfig {
    /// Number of concurrent link probe workers per page
    #[serde(rename = "worker-count")]
    pub worker_count: usize,

    /// Maximum number of pages analysed at once in a batch
    #[serde(rename = "max-concurrent-pages")]
    pub max_concurrent_pages: usize,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            worker_count: 200,
            max_concurrent_pages: 4,
        }
    }
}

/// Outbound HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutboundConfig {
    /// Connection timeout (milliseconds)
    #[serde(rename = "connect-timeout")]
    pub connect_timeout: u64,

    /// Whole-request timeout (milliseconds)
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,

    /// Maximum number of redirects followed per request
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl Default for OutboundConfig {
    fn default() -> Self {
        Self {
            connect_timeout: 5_000,
            request_timeout: 10_000,
            max_redirects: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the analyser
    pub name: String,

    /// Version of the analyser
    pub version: String,

    /// URL with information about the analyser
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: "SumiLens".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/sumi-lens/sumi-lens".to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the user agent header value: `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        format!("{}/{} (+{})", self.name, self.version, self.contact_url)
    }
}
