//! Logo component
//!
//! A logo starts in [`LogoState::Loading`] and settles exactly once, either
//! on [`LogoState::Loaded`] (the image asset decoded) or on
//! [`LogoState::Failed`] (the asset is missing or unreadable). Each state
//! renders differently:
//!
//! | State     | Output                                           |
//! |-----------|--------------------------------------------------|
//! | `Loading` | fixed-size placeholder box with initials         |
//! | `Loaded`  | `<img>` at the size token's pixel dimensions     |
//! | `Failed`  | text label in the size token's font class        |

mod probe;

use std::fmt;

use maud::{html, Markup};

use crate::error::{Result, SiteError};
use crate::logger;

pub use probe::{
    asset_file_path, probe_asset, resolve_logo, sniff_image, ImageFormat, ProbeOutcome,
};

/// Caller-supplied size of the logo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeToken {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeToken {
    /// Pixel (width, height)
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Small => (120, 40),
            Self::Medium => (180, 60),
            Self::Large => (240, 80),
        }
    }

    pub const fn font_class(self) -> &'static str {
        match self {
            Self::Small => "text-base",
            Self::Medium => "text-xl",
            Self::Large => "text-2xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoState {
    Loading,
    Loaded,
    Failed,
}

impl LogoState {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Loading)
    }
}

impl fmt::Display for LogoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Loaded => write!(f, "loaded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Logo {
    src: String,
    label: String,
    size: SizeToken,
    class: String,
    state: LogoState,
}

impl Logo {
    pub fn new(src: impl Into<String>, label: impl Into<String>, size: SizeToken) -> Self {
        Self {
            src: src.into(),
            label: label.into(),
            size,
            class: String::new(),
            state: LogoState::Loading,
        }
    }

    /// Extra utility classes for the outer element
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub const fn state(&self) -> LogoState {
        self.state
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn size(&self) -> SizeToken {
        self.size
    }

    /// The image decoded
    pub fn on_load(&mut self) -> Result<()> {
        self.transition(LogoState::Loaded, "")
    }

    /// The image request errored or the bytes could not be decoded
    pub fn on_error(&mut self, reason: &str) -> Result<()> {
        self.transition(LogoState::Failed, reason)
    }

    /// Both settled states are logged at info
    fn transition(&mut self, next: LogoState, reason: &str) -> Result<()> {
        if self.state.is_terminal() {
            return Err(SiteError::Transition(format!(
                "logo already {}, cannot become {next}",
                self.state
            )));
        }
        self.state = next;
        logger::log_info(&self.transition_line(reason));
        Ok(())
    }

    fn transition_line(&self, reason: &str) -> String {
        match self.state {
            LogoState::Loading => format!("Logo loading: {}", self.src),
            LogoState::Loaded => format!("Logo loaded: {}", self.src),
            LogoState::Failed => format!(
                "Logo failed to load ({}), showing text label: {reason}",
                self.src
            ),
        }
    }

    /// Initials for the placeholder, skipping leading articles
    pub fn initials(&self) -> String {
        let initials: String = self
            .label
            .split_whitespace()
            .filter(|w| !matches!(w.to_ascii_lowercase().as_str(), "the" | "a" | "an"))
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();

        if initials.is_empty() {
            self.label.chars().take(1).collect()
        } else {
            initials
        }
    }

    pub fn render(&self) -> Markup {
        let (width, height) = self.size.dimensions();
        match self.state {
            LogoState::Loading => html! {
                div class={ "flex items-center justify-center rounded bg-orange-100 font-bold text-orange-600 " (self.class) }
                    style={ "width:" (width) "px;height:" (height) "px" }
                    data-logo-state="loading"
                    aria-busy="true" {
                    (self.initials())
                }
            },
            LogoState::Loaded => html! {
                div class={ "flex items-center " (self.class) } data-logo-state="loaded" {
                    img src=(self.src) alt={ (self.label) " Logo" } width=(width) height=(height) class="object-contain";
                }
            },
            LogoState::Failed => html! {
                span class={ "font-bold text-orange-600 " (self.size.font_class()) " " (self.class) } data-logo-state="failed" {
                    (self.label)
                }
            },
        }
    }
}
