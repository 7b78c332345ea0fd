//! Page-top banner
//!
//! Shows the header photo when it is available and falls back to an orange
//! gradient otherwise.

use maud::{html, Markup};

use super::html::{button_link, PRIMARY_BUTTON};

pub struct Hero<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    /// Height utility class, e.g. `h-[50vh]`
    pub height: &'a str,
    /// `(href, label)` pairs rendered as buttons
    pub actions: &'a [(&'a str, &'a str)],
}

impl<'a> Hero<'a> {
    pub const fn new(title: &'a str) -> Self {
        Self {
            title,
            subtitle: None,
            height: "h-[50vh]",
            actions: &[],
        }
    }

    #[must_use]
    pub const fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    #[must_use]
    pub const fn height(mut self, height: &'a str) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub const fn actions(mut self, actions: &'a [(&'a str, &'a str)]) -> Self {
        self.actions = actions;
        self
    }

    /// `image` is the resolved header photo, `None` when it failed to load
    pub fn render(&self, image: Option<&str>) -> Markup {
        html! {
            section class={ "relative w-full " (self.height) " overflow-hidden" } {
                @if let Some(src) = image {
                    img src=(src) alt="Delicious Jollof Rice" class="absolute inset-0 object-cover w-full h-full brightness-50";
                } @else {
                    div class="absolute inset-0 bg-gradient-to-r from-orange-700 to-orange-500" {}
                }
                div class="absolute inset-0 flex flex-col items-center justify-center text-center px-4 md:px-6" {
                    h1 class="text-4xl md:text-6xl font-bold text-white mb-4" { (self.title) }
                    @if let Some(subtitle) = self.subtitle {
                        p class="text-xl md:text-2xl text-white max-w-2xl mb-8" { (subtitle) }
                    }
                    @if !self.actions.is_empty() {
                        div class="flex flex-col sm:flex-row gap-4" {
                            @for (href, label) in self.actions {
                                (button_link(href, label, PRIMARY_BUTTON))
                            }
                        }
                    }
                }
            }
        }
    }
}
