//! Path matching module
//!
//! Decides which request paths bypass the interceptor entirely.

use crate::config::PathRule;

/// Check if a path matches a single rule
pub fn match_path(rule: &PathRule, path: &str) -> bool {
    match rule {
        PathRule::Exact(exact) => path == exact,
        PathRule::Prefix(prefix) => path.starts_with(prefix.as_str()),
    }
}

/// Route-level exclusion list, evaluated before the interceptor runs
#[derive(Debug, Clone)]
pub struct ExclusionMatcher {
    rules: Vec<PathRule>,
}

impl ExclusionMatcher {
    pub const fn new(rules: Vec<PathRule>) -> Self {
        Self { rules }
    }

    /// True when the path must not be passed to the interceptor
    pub fn is_excluded(&self, path: &str) -> bool {
        self.rules.iter().any(|rule| match_path(rule, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_exclusions;

    #[test]
    fn test_match_path_exact() {
        let rule = PathRule::Exact("/favicon.ico".to_string());
        assert!(match_path(&rule, "/favicon.ico"));
        assert!(!match_path(&rule, "/favicon.ico/"));
        assert!(!match_path(&rule, "/favicon.svg"));
    }

    #[test]
    fn test_match_path_prefix() {
        let rule = PathRule::Prefix("/_static/".to_string());
        assert!(match_path(&rule, "/_static/site.css"));
        assert!(match_path(&rule, "/_static/js/app.js"));
        assert!(!match_path(&rule, "/_static"));
        assert!(!match_path(&rule, "/images/logo.png"));
    }

    #[test]
    fn test_default_exclusions() {
        let matcher = ExclusionMatcher::new(default_exclusions());
        assert!(matcher.is_excluded("/_static/site.css"));
        assert!(matcher.is_excluded("/_image/hero.png"));
        assert!(matcher.is_excluded("/favicon.ico"));

        assert!(!matcher.is_excluded("/"));
        assert!(!matcher.is_excluded("/menu"));
        assert!(!matcher.is_excluded("/images/logo.png"));
        assert!(!matcher.is_excluded("/favicon.ico.bak"));
    }

    #[test]
    fn test_empty_rules_exclude_nothing() {
        let matcher = ExclusionMatcher::new(Vec::new());
        assert!(!matcher.is_excluded("/_static/site.css"));
        assert!(!matcher.is_excluded("/favicon.ico"));
    }
}
