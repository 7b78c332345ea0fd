//! Page rendering module
//!
//! Server-rendered markup for the marketing pages. Everything here is
//! static copy from the content catalog; the only per-request work is
//! resolving the logos and the header photo.

mod about;
mod contact;
mod content;
mod errors;
mod hero;
mod home;
mod html;
mod layout;
mod menu;

use chrono::Datelike;

use crate::booking::BookingDraft;
use crate::config::AppState;
use crate::logo::{probe_asset, resolve_logo, Logo, ProbeOutcome, SizeToken};

pub use content::{Price, SiteContent};
pub use hero::Hero;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Menu,
    Contact,
}

impl Page {
    /// Navigation order
    pub const NAV: [Self; 4] = [Self::Home, Self::About, Self::Menu, Self::Contact];

    /// Match a request path, with or without trailing slash
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Home),
            "/about" => Some(Self::About),
            "/menu" => Some(Self::Menu),
            "/contact" => Some(Self::Contact),
            _ => None,
        }
    }

    /// Canonical path
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about/",
            Self::Menu => "/menu/",
            Self::Contact => "/contact/",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Menu => "Menu",
            Self::Contact => "Contact",
        }
    }
}

/// Per-request inputs shared by every page
pub struct RenderContext<'a> {
    pub content: &'a SiteContent,
    pub brand_name: &'a str,
    pub header_logo: Logo,
    pub footer_logo: Logo,
    /// Header photo path, `None` when it could not be loaded
    pub header_image: Option<String>,
    pub year: i32,
}

impl<'a> RenderContext<'a> {
    /// Context with logos still loading and no header photo
    pub fn unresolved(state: &'a AppState) -> Self {
        let site = &state.config.site;
        let label = &state.config.logo.fallback_label;
        Self {
            content: &state.content,
            brand_name: &site.brand_name,
            header_logo: Logo::new(&site.logo_src, label, SizeToken::Medium),
            footer_logo: Logo::new(&site.logo_src, label, SizeToken::Medium),
            header_image: None,
            year: chrono::Local::now().year(),
        }
    }

    /// Mount every image-backed component and settle it
    pub async fn resolve(state: &'a AppState) -> Self {
        let mut ctx = Self::unresolved(state);
        let dir = state.static_dir();
        let timeout = state.logo_probe_timeout();

        let header_src = &state.config.site.header_image;
        let ((), (), hero) = tokio::join!(
            resolve_logo(&mut ctx.header_logo, &dir, timeout),
            resolve_logo(&mut ctx.footer_logo, &dir, timeout),
            probe_asset(&dir, header_src, timeout),
        );

        if matches!(hero, ProbeOutcome::Decoded(_)) {
            ctx.header_image = Some(header_src.clone());
        }
        ctx
    }

    pub fn render(&self, page: Page) -> String {
        let markup = match page {
            Page::Home => home::render(self),
            Page::About => about::render(self),
            Page::Menu => menu::render(self),
            Page::Contact => contact::render(self, &BookingDraft::default(), None),
        };
        markup.into_string()
    }

    pub fn render_contact(&self, draft: &BookingDraft, notice: Option<&str>) -> String {
        contact::render(self, draft, notice).into_string()
    }

    pub fn render_not_found(&self) -> String {
        errors::not_found(self).into_string()
    }

    pub fn render_server_error(&self) -> String {
        errors::server_error(self).into_string()
    }
}
