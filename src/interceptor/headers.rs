//! Response header set produced by the interceptor

use hyper::header::{HeaderMap, HeaderName, HeaderValue};

use crate::logger;

pub const CACHE_CONTROL: &str = "Cache-Control";
pub const X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
pub const X_FRAME_OPTIONS: &str = "X-Frame-Options";
pub const X_XSS_PROTECTION: &str = "X-XSS-Protection";

/// Fixed security headers sent on page responses
pub const SECURITY_HEADERS: [(&str, &str); 3] = [
    (X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (X_FRAME_OPTIONS, "DENY"),
    (X_XSS_PROTECTION, "1; mode=block"),
];

/// Ordered header name/value list
///
/// Names compare case-insensitively on lookup. Setting a name twice
/// replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(String, String)>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(&name))
        {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attach every header to `target`, or none of them.
    ///
    /// Returns false when some entry is not a valid HTTP header; `target`
    /// is left exactly as it was.
    pub fn apply(&self, target: &mut HeaderMap) -> bool {
        let mut staged = Vec::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            let parsed = HeaderName::from_bytes(name.as_bytes())
                .ok()
                .zip(HeaderValue::from_str(value).ok());
            let Some(pair) = parsed else {
                logger::log_warning(&format!(
                    "Skipping interceptor headers, invalid header {name:?}: {value:?}"
                ));
                return false;
            };
            staged.push(pair);
        }

        for (name, value) in staged {
            target.insert(name, value);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_case_insensitively() {
        let mut set = HeaderSet::new();
        set.set("Cache-Control", "no-cache");
        set.set("cache-control", "no-store");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("CACHE-CONTROL"), Some("no-store"));
    }

    #[test]
    fn test_apply_inserts_all() {
        let mut set = HeaderSet::new();
        for (name, value) in SECURITY_HEADERS {
            set.set(name, value);
        }

        let mut map = HeaderMap::new();
        map.insert("x-frame-options", HeaderValue::from_static("SAMEORIGIN"));
        assert!(set.apply(&mut map));
        assert_eq!(map.len(), 3);
        assert_eq!(map["x-frame-options"], "DENY");
        assert_eq!(map["x-xss-protection"], "1; mode=block");
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let mut set = HeaderSet::new();
        set.set(X_CONTENT_TYPE_OPTIONS, "nosniff");
        set.set(X_FRAME_OPTIONS, "bad\nvalue");

        let mut map = HeaderMap::new();
        map.insert("content-type", HeaderValue::from_static("text/html"));
        assert!(!set.apply(&mut map));
        assert_eq!(map.len(), 1);
        assert!(map.get("x-content-type-options").is_none());
    }

    #[test]
    fn test_apply_rejects_bad_name() {
        let mut set = HeaderSet::new();
        set.set("Bad Header", "x");
        let mut map = HeaderMap::new();
        assert!(!set.apply(&mut map));
        assert!(map.is_empty());
    }
}
