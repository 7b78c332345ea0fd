//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Every request goes through the
//! same pipeline: exclusion check, interceptor, method and size checks,
//! route, then the interceptor's headers are attached and the access log
//! is written.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use hyper::body::{Body, Bytes};
use hyper::header::{HeaderMap, HeaderValue, SERVER};
use hyper::{Method, Request, StatusCode, Version};

use crate::config::AppState;
use crate::handler::{contact, static_files};
use crate::http::{self, SiteResponse, ALLOWED_METHODS};
use crate::interceptor::{HeaderSet, RequestDescriptor};
use crate::logger::{self, AccessLogEntry};
use crate::pages::{Page, RenderContext};

pub const HEALTH_PATH: &str = "/healthz";

const READ_ONLY_METHODS: &str = "GET, HEAD, OPTIONS";

/// Request context encapsulating information needed for routing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: Option<SocketAddr>,
) -> Result<SiteResponse, Infallible>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let started = Instant::now();
    let mut entry = state.access_log.then(|| access_entry(&req, remote_addr));

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // Excluded paths never reach the interceptor
    let path = req.uri().path().to_string();
    let headers = if state.exclusions.is_excluded(&path) {
        None
    } else {
        let descriptor = RequestDescriptor::new(req.method().clone(), path.as_str());
        Some(state.interceptor.intercept(&descriptor))
    };

    let mut response = dispatch(req, &state).await;

    if let Ok(server) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert(SERVER, server);
    }
    if let Some(headers) = &headers {
        attach_headers(headers, response.headers_mut());
    }

    if let Some(entry) = entry.as_mut() {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.intercepted = headers.is_some();
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Header computation failures leave the response untouched
fn attach_headers(headers: &HeaderSet, target: &mut HeaderMap) {
    if !headers.apply(target) {
        logger::log_warning("Interceptor headers dropped, serving response without them");
    }
}

async fn dispatch<B>(req: Request<B>, state: &AppState) -> SiteResponse
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let path = req.uri().path();

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(req.method(), path) {
        return resp;
    }

    // 2. Check body size
    if let Some(resp) = check_body_size(req.headers(), state.config.http.max_body_size) {
        return resp;
    }

    // 3. Booking form submission
    if req.method() == Method::POST {
        return contact::handle_submission(req, state).await;
    }

    // 4. Route
    let ctx = RequestContext {
        path,
        is_head: req.method() == Method::HEAD,
        if_none_match: req
            .headers()
            .get("if-none-match")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
    };
    route_request(&ctx, state).await
}

fn accepts_post(path: &str) -> bool {
    matches!(Page::from_path(path), Some(Page::Contact))
}

/// Return a response for methods this path does not accept
fn check_http_method(method: &Method, path: &str) -> Option<SiteResponse> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        Method::POST if accepts_post(path) => None,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method} {path}"));
            let allow = if accepts_post(path) {
                ALLOWED_METHODS
            } else {
                READ_ONLY_METHODS
            };
            Some(http::build_405_response(allow))
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<SiteResponse> {
    let content_length = headers.get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Route request based on path
async fn route_request(ctx: &RequestContext<'_>, state: &AppState) -> SiteResponse {
    if ctx.path == HEALTH_PATH {
        return http::build_health_response();
    }

    if static_files::is_static_path(ctx.path) {
        return match static_files::serve(ctx, &state.static_dir()).await {
            static_files::AssetLookup::Found(resp) => resp,
            static_files::AssetLookup::NotFound => http::build_404_response(),
            static_files::AssetLookup::Failed(e) => {
                logger::log_error(&format!("Static asset {} unreadable: {e}", ctx.path));
                let page = RenderContext::resolve(state).await;
                http::build_html_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    page.render_server_error(),
                    ctx.is_head,
                )
            }
        };
    }

    let page = RenderContext::resolve(state).await;
    match Page::from_path(ctx.path) {
        Some(target) => http::build_html_response(StatusCode::OK, page.render(target), ctx.is_head),
        None => http::build_html_response(
            StatusCode::NOT_FOUND,
            page.render_not_found(),
            ctx.is_head,
        ),
    }
}

fn access_entry<B>(req: &Request<B>, remote_addr: Option<SocketAddr>) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        remote_addr.map_or_else(|| "-".to_string(), |a| a.ip().to_string()),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2.0",
        Version::HTTP_3 => "3.0",
        _ => "1.1",
    }
}
