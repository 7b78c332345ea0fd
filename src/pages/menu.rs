use maud::{html, Markup};

use super::content::{CateringPackage, MenuItem, MenuSection};
use super::hero::Hero;
use super::html::{button_link, PRIMARY_BUTTON};
use super::{Page, RenderContext};

/// Anchor id for a section title, e.g. "Side Dishes" -> "side-dishes"
pub fn section_anchor(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn item_card(item: &MenuItem) -> Markup {
    html! {
        div class="rounded-lg border bg-white p-6" {
            div class="flex justify-between items-start mb-2" {
                h3 class="text-xl font-bold" { (item.name) }
                p class="font-semibold text-orange-600" { (item.price.to_string()) }
            }
            p class="text-gray-500 mb-4" { (item.description) }
            @if let Some(note) = &item.note {
                p class="text-sm text-gray-500" { (note) }
            }
        }
    }
}

fn section(section: &MenuSection) -> Markup {
    html! {
        section id=(section_anchor(&section.title)) class="mb-16" {
            h2 class="text-3xl font-bold mb-8" { (section.title) }
            div class="grid grid-cols-1 md:grid-cols-2 gap-6" {
                @for item in &section.items {
                    (item_card(item))
                }
            }
        }
    }
}

fn catering_card(package: &CateringPackage) -> Markup {
    html! {
        div class="rounded-lg bg-white p-6 shadow" {
            h3 class="text-2xl font-bold mb-2" { (package.name) }
            p class="text-gray-500 mb-4" { (package.serves) }
            ul class="list-disc pl-5 mb-4 space-y-1" {
                @for item in &package.items {
                    li { (item) }
                }
            }
            p class="text-xl font-bold text-orange-600 mb-4" { "Starting at " (package.price.to_string()) }
            (button_link("/contact/", "Inquire Now", PRIMARY_BUTTON))
        }
    }
}

pub fn render(ctx: &RenderContext<'_>) -> Markup {
    let menu = &ctx.content.menu;

    let hero = Hero::new("Our Menu")
        .subtitle(&menu.subtitle)
        .render(ctx.header_image.as_deref());

    let body = html! {
        (hero)
        div class="container mx-auto px-4 md:px-6 py-16" {
            nav class="flex flex-wrap justify-center gap-2 mb-12" {
                @for s in &menu.sections {
                    a href={ "#" (section_anchor(&s.title)) } class="rounded-md px-4 py-2 text-sm font-medium hover:bg-orange-100" {
                        (s.title)
                    }
                }
            }
            @for s in &menu.sections {
                (section(s))
            }
        }
        section class="py-16 px-4 md:px-6 bg-orange-50" {
            div class="container mx-auto" {
                h2 class="text-3xl md:text-4xl font-bold text-center mb-4" { "Catering Menu" }
                p class="text-xl text-gray-600 text-center max-w-3xl mx-auto mb-12" { (menu.catering_intro) }
                div class="grid grid-cols-1 md:grid-cols-2 gap-8" {
                    @for package in &menu.catering {
                        (catering_card(package))
                    }
                }
                div class="mt-12 text-center" {
                    p class="text-lg text-gray-600 mb-4" { (menu.catering_note) }
                    (button_link("/contact/", "Contact Us for Custom Quotes", PRIMARY_BUTTON))
                }
            }
        }
    };

    super::layout::render(ctx, "Our Menu", Some(Page::Menu), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::Price;

    #[test]
    fn test_section_anchor() {
        assert_eq!(section_anchor("Main Dishes"), "main-dishes");
        assert_eq!(section_anchor("Drinks"), "drinks");
        assert_eq!(section_anchor("Sides & Extras!"), "sides-extras");
    }

    #[test]
    fn test_item_card_escapes_copy() {
        let item = MenuItem {
            name: "Rice & Stew".to_string(),
            price: Price(1299),
            description: "<b>spicy</b>".to_string(),
            note: Some("Contains \"pepper\"".to_string()),
        };
        let html = item_card(&item).into_string();
        assert!(html.contains(">Rice &amp; Stew</h3>"));
        assert!(html.contains(">$12.99</p>"));
        assert!(html.contains("&lt;b&gt;spicy&lt;/b&gt;"));
        assert!(html.contains("Contains &quot;pepper&quot;"));
    }
}
