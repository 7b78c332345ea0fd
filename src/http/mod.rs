//! HTTP protocol layer module
//!
//! Response builders plus the content-type and `ETag` helpers used by
//! static asset serving.

pub mod cache;
pub mod mime;
pub mod response;

pub use response::{
    build_304_response, build_400_response, build_404_response, build_405_response,
    build_413_response, build_asset_response, build_health_response, build_html_response,
    build_options_response, build_text_response, SiteResponse, ALLOWED_METHODS,
};
