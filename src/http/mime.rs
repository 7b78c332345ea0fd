//! Content-Type lookup for files under the static directory

use std::path::Path;

/// Content-Type for a static asset, by extension
///
/// # Examples
/// ```
/// use jollof_site::http::mime::content_type_for;
/// assert_eq!(content_type_for("images/logo.png".as_ref()), "image/png");
/// assert_eq!(content_type_for("_static/site.css".as_ref()), "text/css; charset=utf-8");
/// assert_eq!(content_type_for("README".as_ref()), "application/octet-stream");
/// ```
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("webmanifest") => "application/manifest+json",

        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",

        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_asset_types() {
        assert_eq!(content_type_for(Path::new("a/b.JPG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("favicon.ico")), "image/x-icon");
        assert_eq!(content_type_for(Path::new("x.woff2")), "font/woff2");
        assert_eq!(content_type_for(Path::new("x.svg")), "image/svg+xml");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type_for(Path::new("x.xyz")), "application/octet-stream");
        assert_eq!(content_type_for(Path::new("noext")), "application/octet-stream");
    }
}
