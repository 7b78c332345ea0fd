//! Routing module
//!
//! Provides the path matcher that keeps internal asset paths away from
//! the request interceptor.

mod matcher;

pub use matcher::{match_path, ExclusionMatcher};
