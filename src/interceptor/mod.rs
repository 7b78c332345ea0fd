//! Request interceptor
//!
//! Runs once per inbound request, before the page is rendered, and decides
//! which headers the response carries:
//!
//! - asset paths (`/images/` by default) get an immutable cache directive
//! - every other path gets the fixed security headers
//!
//! The request itself is never rewritten or short-circuited. Paths on the
//! exclusion list (see [`crate::routing`]) never reach this module.

mod headers;

use chrono::{DateTime, SecondsFormat, Utc};
use hyper::Method;

use crate::config::InterceptorConfig;
use crate::logger;

pub use headers::{
    HeaderSet, CACHE_CONTROL, SECURITY_HEADERS, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
    X_XSS_PROTECTION,
};

/// Per-request values the interceptor looks at
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub timestamp: DateTime<Utc>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            timestamp: Utc::now(),
        }
    }

    /// Diagnostic record, e.g. `[2024-05-01T12:00:00.000Z] GET /menu`
    pub fn diagnostic_line(&self) -> String {
        format!(
            "[{}] {} {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.method,
            self.path
        )
    }
}

#[derive(Debug, Clone)]
pub struct Interceptor {
    asset_prefix: String,
    cache_directive: String,
    secure_assets: bool,
}

impl Interceptor {
    pub fn new(config: &InterceptorConfig) -> Self {
        Self {
            asset_prefix: config.asset_prefix.clone(),
            cache_directive: format!("public, max-age={}, immutable", config.asset_max_age),
            secure_assets: config.secure_assets,
        }
    }

    pub fn is_asset_path(&self, path: &str) -> bool {
        path.starts_with(self.asset_prefix.as_str())
    }

    /// Log the request and compute the header set for its response
    pub fn intercept(&self, request: &RequestDescriptor) -> HeaderSet {
        logger::log_intercept(&request.diagnostic_line());
        self.headers_for(&request.path)
    }

    /// Header set for a path, without the diagnostic side effect
    pub fn headers_for(&self, path: &str) -> HeaderSet {
        let mut set = HeaderSet::new();

        if self.is_asset_path(path) {
            set.set(CACHE_CONTROL, self.cache_directive.as_str());
            if !self.secure_assets {
                return set;
            }
        }

        for (name, value) in SECURITY_HEADERS {
            set.set(name, value);
        }
        set
    }
}
