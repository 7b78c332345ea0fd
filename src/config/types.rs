// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub site: SiteConfig,
    pub interceptor: InterceptorConfig,
    pub logo: LogoConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub max_body_size: u64,
}

/// Site content and asset locations
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteConfig {
    /// Directory holding `images/`, `_static/` and `favicon.ico`
    pub static_dir: String,
    pub brand_name: String,
    /// Request path of the wide logo image
    pub logo_src: String,
    /// Request path of the hero background image
    pub header_image: String,
    /// Paths the interceptor never sees
    #[serde(default = "default_exclusions")]
    pub exclusions: Vec<PathRule>,
}

/// Path rule used by the exclusion matcher
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "path", rename_all = "snake_case")]
pub enum PathRule {
    Exact(String),
    Prefix(String),
}

pub fn default_exclusions() -> Vec<PathRule> {
    vec![
        PathRule::Prefix("/_static/".to_string()),
        PathRule::Prefix("/_image/".to_string()),
        PathRule::Exact("/favicon.ico".to_string()),
    ]
}

/// Request interceptor configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InterceptorConfig {
    /// Paths starting with this prefix get the immutable cache header
    pub asset_prefix: String,
    /// max-age (seconds) for asset responses
    pub asset_max_age: u64,
    /// Also send the security headers on asset responses
    pub secure_assets: bool,
}

impl Default for InterceptorConfig {
    fn default() -> Self {
        Self {
            asset_prefix: "/images/".to_string(),
            asset_max_age: 86_400,
            secure_assets: false,
        }
    }
}

/// Logo resolution configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogoConfig {
    /// Upper bound for probing the logo asset; `None` waits indefinitely
    pub probe_timeout_ms: Option<u64>,
    /// Text shown when the logo image cannot be loaded
    pub fallback_label: String,
}
