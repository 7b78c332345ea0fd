//! Static file serving module
//!
//! Loads files under `site.static_dir`, detects their content type and
//! answers conditional requests with 304.

use std::io;
use std::path::Path;

use hyper::body::Bytes;
use tokio::fs;

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, SiteResponse};
use crate::logger;
use crate::logo::asset_file_path;

/// Path prefixes served straight from the static directory
pub const STATIC_PREFIXES: [&str; 2] = ["/images/", "/_static/"];

pub const FAVICON_PATH: &str = "/favicon.ico";

pub fn is_static_path(path: &str) -> bool {
    path == FAVICON_PATH || STATIC_PREFIXES.iter().any(|p| path.starts_with(p))
}

/// Result of looking up a static asset
#[derive(Debug)]
pub enum AssetLookup {
    Found(SiteResponse),
    NotFound,
    /// The file exists but could not be read
    Failed(io::Error),
}

/// Serve the file behind `ctx.path` from `static_dir`
pub async fn serve(ctx: &RequestContext<'_>, static_dir: &Path) -> AssetLookup {
    match load(static_dir, ctx.path).await {
        Ok(Some((data, content_type))) => {
            AssetLookup::Found(build_static_file_response(data, content_type, ctx))
        }
        Ok(None) => AssetLookup::NotFound,
        Err(e) => AssetLookup::Failed(e),
    }
}

/// Read a static file, refusing anything that resolves outside `static_dir`
pub async fn load(static_dir: &Path, path: &str) -> io::Result<Option<(Bytes, &'static str)>> {
    let Some(file_path) = asset_file_path(static_dir, path) else {
        logger::log_warning(&format!("Path traversal attempt blocked: {path}"));
        return Ok(None);
    };

    let static_dir_canonical = match fs::canonicalize(static_dir).await {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{}': {e}",
                static_dir.display()
            ));
            return Ok(None);
        }
    };

    // File not found is common (404), no need to log at warning level
    let file_path_canonical = match fs::canonicalize(&file_path).await {
        Ok(p) => p,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!(
            "Symlink escape blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return Ok(None);
    }
    if !fs::metadata(&file_path_canonical).await?.is_file() {
        return Ok(None);
    }

    let content = fs::read(&file_path_canonical).await.map_err(|e| {
        logger::log_error(&format!(
            "Failed to read file '{}': {e}",
            file_path_canonical.display()
        ));
        e
    })?;

    Ok(Some((Bytes::from(content), mime::content_type_for(&file_path))))
}

fn build_static_file_response(
    data: Bytes,
    content_type: &str,
    ctx: &RequestContext<'_>,
) -> SiteResponse {
    let etag = cache::generate_etag(&data);

    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    http::build_asset_response(data, content_type, &etag, ctx.is_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/logo.png"), b"\x89PNG\r\n\x1a\nrest").unwrap();
        std::fs::write(dir.path().join("favicon.ico"), b"\0\0\x01\0").unwrap();
        dir
    }

    fn ctx(path: &str) -> RequestContext<'_> {
        RequestContext {
            path,
            is_head: false,
            if_none_match: None,
        }
    }

    #[test]
    fn test_is_static_path() {
        assert!(is_static_path("/images/logo.png"));
        assert!(is_static_path("/_static/site.css"));
        assert!(is_static_path("/favicon.ico"));
        assert!(!is_static_path("/menu/"));
        assert!(!is_static_path("/imagesx"));
    }

    #[tokio::test]
    async fn test_load_with_content_type() {
        let dir = fixture();
        let (data, content_type) = load(dir.path(), "/images/logo.png").await.unwrap().unwrap();
        assert_eq!(content_type, "image/png");
        assert!(data.starts_with(b"\x89PNG"));

        let (_, content_type) = load(dir.path(), "/favicon.ico").await.unwrap().unwrap();
        assert_eq!(content_type, "image/x-icon");
    }

    #[tokio::test]
    async fn test_missing_and_traversal() {
        let dir = fixture();
        assert!(load(dir.path(), "/images/none.png").await.unwrap().is_none());
        assert!(load(dir.path(), "/images/../../etc/passwd").await.unwrap().is_none());
        assert!(load(dir.path(), "/images").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_etag_revalidation() {
        let dir = fixture();
        let AssetLookup::Found(first) = serve(&ctx("/images/logo.png"), dir.path()).await else {
            panic!("asset should be found");
        };
        assert_eq!(first.status(), StatusCode::OK);
        let etag = first.headers()["etag"].to_str().unwrap().to_string();

        let mut revalidate = ctx("/images/logo.png");
        revalidate.if_none_match = Some(etag);
        let AssetLookup::Found(second) = serve(&revalidate, dir.path()).await else {
            panic!("asset should be found");
        };
        assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
    }
}
