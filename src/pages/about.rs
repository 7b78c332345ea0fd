use maud::{html, Markup};

use super::hero::Hero;
use super::html::{button_link, OUTLINE_BUTTON, PRIMARY_BUTTON};
use super::{Page, RenderContext};

pub fn render(ctx: &RenderContext<'_>) -> Markup {
    let about = &ctx.content.about;

    let hero = Hero::new("About Us")
        .subtitle(&about.subtitle)
        .render(ctx.header_image.as_deref());

    let body = html! {
        (hero)
        section class="py-16 px-4 md:px-6" {
            div class="container mx-auto max-w-4xl" {
                h2 class="text-3xl md:text-4xl font-bold mb-8" { "Our Story" }
                @for paragraph in &about.story {
                    p class="text-lg text-gray-600 mb-4" { (paragraph) }
                }
            }
        }
        section class="py-16 px-4 md:px-6 bg-orange-50" {
            div class="container mx-auto text-center" {
                h2 class="text-3xl md:text-4xl font-bold mb-4" { "Our Mission" }
                p class="text-xl text-gray-600 max-w-3xl mx-auto mb-12" { (about.mission) }
                div class="grid grid-cols-1 md:grid-cols-3 gap-8" {
                    @for value in &about.values {
                        div class="rounded-lg bg-white p-6 shadow text-center" {
                            h3 class="text-xl font-bold mb-2" { (value.title) }
                            p class="text-gray-500" { (value.text) }
                        }
                    }
                }
            }
        }
        section class="py-16 px-4 md:px-6" {
            div class="container mx-auto" {
                h2 class="text-3xl md:text-4xl font-bold text-center mb-12" { "Meet the Team" }
                div class="grid grid-cols-1 md:grid-cols-3 gap-8" {
                    @for member in &ctx.content.team {
                        div class="text-center" {
                            div class="mx-auto mb-4 h-40 w-40 rounded-full bg-orange-200" role="img" aria-label=(member.name) {}
                            h3 class="text-xl font-bold" { (member.name) }
                            p class="text-orange-600 mb-2" { (member.role) }
                            p class="text-gray-500" { (member.bio) }
                        }
                    }
                }
            }
        }
        section class="py-16 px-4 md:px-6 bg-orange-50 text-center" {
            h2 class="text-3xl md:text-4xl font-bold mb-4" { (about.cta_title) }
            p class="text-xl text-gray-600 mb-8" { (about.cta_text) }
            div class="flex flex-col sm:flex-row gap-4 justify-center" {
                (button_link("/menu/", "View Our Menu", PRIMARY_BUTTON))
                (button_link("/contact/", "Contact Us", OUTLINE_BUTTON))
            }
        }
    };

    super::layout::render(ctx, "About Us", Some(Page::About), body)
}
