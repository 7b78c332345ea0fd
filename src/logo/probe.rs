//! Image asset probing
//!
//! Reads an image from the static directory and checks its signature, which
//! is what drives a [`Logo`] out of `Loading`.

use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use tokio::fs;

use super::Logo;
use crate::logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
    Svg,
}

#[derive(Debug)]
pub enum ProbeOutcome {
    Decoded(ImageFormat),
    /// File missing, unreadable, or path rejected
    Unavailable(io::Error),
    /// Bytes are not a known image format
    Undecodable,
    /// The probe did not settle before the deadline
    TimedOut,
}

/// Identify an image by its leading bytes
pub fn sniff_image(data: &[u8]) -> Option<ImageFormat> {
    if data.starts_with(b"\x89PNG\r\n\x1a\n") {
        return Some(ImageFormat::Png);
    }
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(ImageFormat::Jpeg);
    }
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some(ImageFormat::Gif);
    }
    if data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        return Some(ImageFormat::Webp);
    }

    let head = String::from_utf8_lossy(&data[..data.len().min(1024)]);
    let head = head.trim_start_matches('\u{feff}').trim_start();
    if (head.starts_with("<svg") || head.starts_with("<?xml")) && head.contains("<svg") {
        return Some(ImageFormat::Svg);
    }
    None
}

/// Map a request path like `/images/logo.png` onto the static directory
///
/// Returns `None` for paths that would leave the directory.
pub fn asset_file_path(static_dir: &Path, src: &str) -> Option<PathBuf> {
    let relative = Path::new(src.trim_start_matches('/'));
    if relative.as_os_str().is_empty()
        || !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(static_dir.join(relative))
}

async fn read_and_sniff(path: PathBuf) -> ProbeOutcome {
    match fs::read(&path).await {
        Ok(data) => sniff_image(&data).map_or(ProbeOutcome::Undecodable, ProbeOutcome::Decoded),
        Err(e) => ProbeOutcome::Unavailable(e),
    }
}

/// Probe the asset behind `src`, bounded by `timeout` when given
pub async fn probe_asset(static_dir: &Path, src: &str, timeout: Option<Duration>) -> ProbeOutcome {
    let Some(path) = asset_file_path(static_dir, src) else {
        return ProbeOutcome::Unavailable(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("asset path outside static directory: {src}"),
        ));
    };

    match timeout {
        Some(limit) => tokio::time::timeout(limit, read_and_sniff(path))
            .await
            .unwrap_or(ProbeOutcome::TimedOut),
        None => read_and_sniff(path).await,
    }
}

/// Drive a fresh logo through its single transition
///
/// A probe that times out leaves the logo in `Loading`.
pub async fn resolve_logo(logo: &mut Logo, static_dir: &Path, timeout: Option<Duration>) {
    let outcome = probe_asset(static_dir, logo.src(), timeout).await;
    let result = match outcome {
        ProbeOutcome::Decoded(_) => logo.on_load(),
        ProbeOutcome::Unavailable(e) => logo.on_error(&e.to_string()),
        ProbeOutcome::Undecodable => logo.on_error("unrecognized image data"),
        ProbeOutcome::TimedOut => {
            logger::log_warning(&format!(
                "Logo probe for {} timed out, rendering placeholder",
                logo.src()
            ));
            return;
        }
    };

    if let Err(e) = result {
        logger::log_warning(&e.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo::{LogoState, SizeToken};

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn test_sniff_formats() {
        assert_eq!(sniff_image(PNG_HEADER), Some(ImageFormat::Png));
        assert_eq!(sniff_image(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(sniff_image(b"GIF89a...."), Some(ImageFormat::Gif));
        assert_eq!(sniff_image(b"RIFF\0\0\0\0WEBPVP8 "), Some(ImageFormat::Webp));
        assert_eq!(
            sniff_image(b"  <svg xmlns=\"http://www.w3.org/2000/svg\"></svg>"),
            Some(ImageFormat::Svg)
        );
        assert_eq!(
            sniff_image(b"<?xml version=\"1.0\"?>\n<svg></svg>"),
            Some(ImageFormat::Svg)
        );
    }

    #[test]
    fn test_sniff_rejects_other_data() {
        assert_eq!(sniff_image(b""), None);
        assert_eq!(sniff_image(b"<html></html>"), None);
        assert_eq!(sniff_image(b"<?xml version=\"1.0\"?><feed/>"), None);
        assert_eq!(sniff_image(b"RIFF\0\0\0\0WAVE"), None);
    }

    #[test]
    fn test_asset_file_path() {
        let dir = Path::new("static");
        assert_eq!(
            asset_file_path(dir, "/images/logo.png"),
            Some(PathBuf::from("static/images/logo.png"))
        );
        assert_eq!(asset_file_path(dir, "/images/../../etc/passwd"), None);
        assert_eq!(asset_file_path(dir, "/"), None);
    }

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/logo.png"), PNG_HEADER).unwrap();
        std::fs::write(dir.path().join("images/broken.png"), b"not an image").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_resolve_loaded() {
        let dir = fixture();
        let mut logo = Logo::new("/images/logo.png", "The Jollof Guys", SizeToken::Medium);
        resolve_logo(&mut logo, dir.path(), Some(Duration::from_secs(5))).await;
        assert_eq!(logo.state(), LogoState::Loaded);
    }

    #[tokio::test]
    async fn test_resolve_missing_fails() {
        let dir = fixture();
        let mut logo = Logo::new("/images/none.png", "The Jollof Guys", SizeToken::Medium);
        resolve_logo(&mut logo, dir.path(), None).await;
        assert_eq!(logo.state(), LogoState::Failed);
        assert!(logo.render().into_string().contains("The Jollof Guys"));
    }

    #[tokio::test]
    async fn test_resolve_undecodable_fails() {
        let dir = fixture();
        let mut logo = Logo::new("/images/broken.png", "The Jollof Guys", SizeToken::Small);
        resolve_logo(&mut logo, dir.path(), None).await;
        assert_eq!(logo.state(), LogoState::Failed);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_stalled_read_stays_loading() {
        let dir = fixture();
        let fifo = dir.path().join("images/stall.png");
        let status = std::process::Command::new("mkfifo")
            .arg(&fifo)
            .status()
            .unwrap();
        assert!(status.success());

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let logo = rt.block_on(async {
            let mut logo = Logo::new("/images/stall.png", "The Jollof Guys", SizeToken::Small);
            resolve_logo(&mut logo, dir.path(), Some(Duration::from_millis(50))).await;
            logo
        });
        assert_eq!(logo.state(), LogoState::Loading);
        assert!(logo.render().into_string().contains(r#"data-logo-state="loading""#));

        drop(
            std::fs::OpenOptions::new()
                .read(true)
                .write(true)
                .open(&fifo)
                .unwrap(),
        );
        rt.shutdown_background();
    }

    #[tokio::test]
    async fn test_resolve_settled_logo_is_untouched() {
        let dir = fixture();
        let mut logo = Logo::new("/images/none.png", "The Jollof Guys", SizeToken::Small);
        logo.on_load().unwrap();
        resolve_logo(&mut logo, dir.path(), None).await;
        assert_eq!(logo.state(), LogoState::Loaded);
    }
}
