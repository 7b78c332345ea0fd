// Application state module
// Everything a request needs, built once at startup and shared read-only

use std::path::PathBuf;
use std::time::Duration;

use super::types::Config;
use crate::error::Result;
use crate::interceptor::Interceptor;
use crate::pages::SiteContent;
use crate::routing::ExclusionMatcher;

/// Application state
pub struct AppState {
    pub config: Config,
    pub content: SiteContent,
    pub interceptor: Interceptor,
    pub exclusions: ExclusionMatcher,
    /// Copied out of `config.logging` for the request path
    pub access_log: bool,
}

impl AppState {
    /// Build state from configuration and the embedded content catalog
    pub fn new(config: &Config) -> Result<Self> {
        let content = SiteContent::embedded()?;
        Ok(Self {
            interceptor: Interceptor::new(&config.interceptor),
            exclusions: ExclusionMatcher::new(config.site.exclusions.clone()),
            access_log: config.logging.access_log,
            config: config.clone(),
            content,
        })
    }

    pub fn static_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.site.static_dir)
    }

    pub fn logo_probe_timeout(&self) -> Option<Duration> {
        self.config.logo.probe_timeout_ms.map(Duration::from_millis)
    }
}
