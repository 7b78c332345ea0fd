//! HTTP response building module
//!
//! Builders for the status codes the site answers with. A builder that
//! fails logs and falls back to an empty response instead of erroring.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

pub type SiteResponse = Response<Full<Bytes>>;

pub const ALLOWED_METHODS: &str = "GET, HEAD, POST, OPTIONS";

fn body_for(content: Bytes, is_head: bool) -> Full<Bytes> {
    if is_head {
        Full::new(Bytes::new())
    } else {
        Full::new(content)
    }
}

/// Build HTML page response
pub fn build_html_response(status: StatusCode, content: String, is_head: bool) -> SiteResponse {
    let content_length = content.len();
    Response::builder()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(body_for(Bytes::from(content), is_head))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build plain text response
pub fn build_text_response(status: StatusCode, text: &'static str) -> SiteResponse {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from_static(text.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::from_static(text.as_bytes())))
        })
}

/// Build static asset response with `ETag`
pub fn build_asset_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    is_head: bool,
) -> SiteResponse {
    let content_length = data.len();
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("ETag", etag)
        .body(body_for(data, is_head))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str) -> SiteResponse {
    Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header("ETag", etag)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response for assets (pages use the rendered 404 page)
pub fn build_404_response() -> SiteResponse {
    build_text_response(StatusCode::NOT_FOUND, "404 Not Found")
}

/// Build 405 Method Not Allowed response
pub fn build_405_response(allow: &str) -> SiteResponse {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Allow", allow)
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response
pub fn build_options_response() -> SiteResponse {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", ALLOWED_METHODS)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> SiteResponse {
    build_text_response(StatusCode::PAYLOAD_TOO_LARGE, "413 Payload Too Large")
}

/// Build 400 Bad Request response
pub fn build_400_response() -> SiteResponse {
    build_text_response(StatusCode::BAD_REQUEST, "400 Bad Request")
}

/// Build health check response
pub fn build_health_response() -> SiteResponse {
    build_text_response(StatusCode::OK, "ok")
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_response() {
        let resp = build_html_response(StatusCode::NOT_FOUND, "<p>x</p>".to_string(), false);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()["content-type"], "text/html; charset=utf-8");
        assert_eq!(resp.headers()["content-length"], "8");
    }

    #[test]
    fn test_head_keeps_content_length() {
        let resp = build_asset_response(Bytes::from_static(b"abcd"), "image/png", "\"1\"", true);
        assert_eq!(resp.headers()["content-length"], "4");
        assert_eq!(resp.headers()["etag"], "\"1\"");
        assert!(resp.headers().get("cache-control").is_none());
    }

    #[test]
    fn test_405_and_options() {
        let resp = build_405_response("GET, HEAD");
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["allow"], "GET, HEAD");

        let resp = build_options_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(resp.headers()["allow"], ALLOWED_METHODS);
    }
}
