use maud::{html, Markup};

use super::hero::Hero;
use super::html::{button_link, PRIMARY_BUTTON};
use super::{Page, RenderContext};

const HERO_ACTIONS: [(&str, &str); 2] = [("/menu/", "View Our Menu"), ("/contact/", "Book Catering")];
const STARS: &str = "★★★★★";

pub fn render(ctx: &RenderContext<'_>) -> Markup {
    let content = ctx.content;

    let hero = Hero::new(ctx.brand_name)
        .subtitle(&content.brand.tagline)
        .height("h-[80vh]")
        .actions(&HERO_ACTIONS)
        .render(ctx.header_image.as_deref());

    let body = html! {
        (hero)
        section class="py-16 px-4 md:px-6 bg-orange-50" {
            div class="container mx-auto" {
                h2 class="text-3xl md:text-4xl font-bold text-center mb-12" { "Our Signature Dishes" }
                div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8" {
                    @for item in content.featured_items() {
                        div class="overflow-hidden rounded-lg bg-white shadow-lg" {
                            div class="h-64 bg-orange-200" role="img" aria-label=(item.name) {}
                            div class="p-6" {
                                h3 class="text-xl font-bold mb-2" { (item.name) }
                                p class="text-gray-500 mb-4" { (item.description) }
                                p class="font-semibold text-orange-600" { (item.price.to_string()) }
                            }
                        }
                    }
                }
                div class="mt-12 text-center" {
                    (button_link("/menu/", "View Full Menu", PRIMARY_BUTTON))
                }
            }
        }
        section class="py-16 px-4 md:px-6" {
            div class="container mx-auto" {
                h2 class="text-3xl md:text-4xl font-bold text-center mb-12" { "Find Us at NYC Street Markets" }
                div class="grid grid-cols-1 md:grid-cols-3 gap-8" {
                    @for market in &content.markets {
                        div class="rounded-lg border p-6 text-center" {
                            h3 class="text-xl font-bold mb-2" { (market.name) }
                            p class="text-gray-500" { (market.schedule) }
                            p class="text-gray-500" { (market.location) }
                        }
                    }
                }
            }
        }
        section class="py-16 px-4 md:px-6 bg-orange-50" {
            div class="container mx-auto" {
                h2 class="text-3xl md:text-4xl font-bold text-center mb-12" { "What Our Customers Say" }
                div class="grid grid-cols-1 md:grid-cols-3 gap-8" {
                    @for t in &content.testimonials {
                        div class="rounded-lg bg-white p-6 shadow" {
                            div class="text-orange-500 mb-4" aria-label="5 stars" { (STARS) }
                            p class="italic mb-4" { "“" (t.quote) "”" }
                            p class="font-semibold" { (t.name) }
                            p class="text-sm text-gray-500" { (t.location) }
                        }
                    }
                }
            }
        }
        section class="py-16 px-4 md:px-6 bg-orange-600 text-white text-center" {
            h2 class="text-3xl md:text-4xl font-bold mb-4" { (content.home.cta_title) }
            p class="text-xl mb-8" { (content.home.cta_text) }
            (button_link(
                "/contact/",
                "Book Catering",
                "bg-white text-orange-600 hover:bg-orange-100 font-semibold",
            ))
        }
    };

    super::layout::render(ctx, "", Some(Page::Home), body)
}
