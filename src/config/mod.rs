// Configuration module entry point
// Loads site configuration and holds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

use crate::error::{Result, SiteError};

// Re-export public types
pub use state::AppState;
pub use types::{
    default_exclusions, Config, HttpConfig, InterceptorConfig, LogoConfig, LoggingConfig,
    PathRule, PerformanceConfig, ServerConfig, SiteConfig,
};

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Environment variables prefixed with `SITE` override file values,
    /// e.g. `SITE_SERVER__PORT=9000`
    pub fn load_from(config_path: &str) -> Result<Self> {
        let settings = with_defaults(config::Config::builder())?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SITE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Configuration made only of built-in defaults
    pub fn defaults() -> Result<Self> {
        let settings = with_defaults(config::Config::builder())?.build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse().map_err(|e| SiteError::Address {
            message: format!("{e}"),
            addr,
        })
    }
}

fn with_defaults(builder: Builder) -> std::result::Result<Builder, config::ConfigError> {
    let asset = InterceptorConfig::default();
    builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        .set_default("logging.level", "info")?
        .set_default("logging.access_log", true)?
        .set_default("logging.show_headers", false)?
        .set_default("performance.keep_alive_timeout", 75)?
        .set_default("performance.read_timeout", 30)?
        .set_default("performance.write_timeout", 30)?
        .set_default("http.server_name", "jollof-site/0.1")?
        .set_default("http.max_body_size", 65_536)?
        .set_default("site.static_dir", "static")?
        .set_default("site.brand_name", "The Jollof Guys")?
        .set_default("site.logo_src", "/images/jollof-logo-wide.png")?
        .set_default("site.header_image", "/images/headerimagejollof.png")?
        .set_default("interceptor.asset_prefix", asset.asset_prefix)?
        .set_default("interceptor.asset_max_age", asset.asset_max_age)?
        .set_default("interceptor.secure_assets", asset.secure_assets)?
        .set_default("logo.probe_timeout_ms", 250)?
        .set_default("logo.fallback_label", "The Jollof Guys")
}
