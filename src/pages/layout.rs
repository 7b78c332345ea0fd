//! Document shell: head, sticky header with logo and navigation, footer

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::{Page, RenderContext};

const NAV_LINK: &str = "text-sm font-medium hover:text-orange-600 hover:underline underline-offset-4";
const FOOTER_LINK: &str = "text-sm text-gray-500 hover:text-orange-600";

const INSTAGRAM_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="h-5 w-5"><rect x="2" y="2" width="20" height="20" rx="5" ry="5"></rect><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path><line x1="17.5" y1="6.5" x2="17.51" y2="6.5"></line></svg>"#;

/// Wrap a page body in the full document
pub fn render(ctx: &RenderContext<'_>, title: &str, active: Option<Page>, body: Markup) -> Markup {
    let page_title = if title.is_empty() {
        format!("{} - Authentic West African Jollof Rice in NYC", ctx.brand_name)
    } else {
        format!("{title} | {}", ctx.brand_name)
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title) }
                meta name="description" content=(ctx.content.brand.description);
                link rel="icon" href="/favicon.ico";
                script src="https://cdn.tailwindcss.com" {}
                link rel="stylesheet" href="/_static/site.css";
            }
            body class="font-sans antialiased" {
                (header(ctx, active))
                main { (body) }
                (footer(ctx))
            }
        }
    }
}

fn header(ctx: &RenderContext<'_>, active: Option<Page>) -> Markup {
    html! {
        header class="sticky top-0 z-50 w-full border-b bg-white/95 backdrop-blur" {
            div class="container mx-auto flex h-16 items-center px-4" {
                a href="/" class="flex items-center gap-3" {
                    (ctx.header_logo.render())
                    span class="font-bold text-orange-600 text-xl" { (ctx.brand_name) }
                }
                nav class="ml-auto flex gap-4 sm:gap-6" {
                    @for page in Page::NAV {
                        a href=(page.path()) class=(NAV_LINK) aria-current=[(Some(page) == active).then_some("page")] {
                            (page.label())
                        }
                    }
                }
            }
        }
    }
}

fn footer(ctx: &RenderContext<'_>) -> Markup {
    let brand = &ctx.content.brand;
    html! {
        footer class="border-t bg-orange-50" {
            div class="container mx-auto px-4 py-8 md:py-12" {
                div class="grid grid-cols-1 md:grid-cols-4 gap-8" {
                    div {
                        a href="/" class="flex items-center gap-3 mb-4" {
                            (ctx.footer_logo.render())
                            span class="font-bold text-orange-600 text-xl" { (ctx.brand_name) }
                        }
                        p class="text-sm text-gray-500" { (brand.blurb) }
                    }
                    div {
                        h3 class="font-semibold mb-4" { "Quick Links" }
                        ul class="space-y-2" {
                            @for page in Page::NAV {
                                li { a href=(page.path()) class=(FOOTER_LINK) { (page.label()) } }
                            }
                        }
                    }
                    div {
                        h3 class="font-semibold mb-4" { "Contact" }
                        ul class="space-y-2" {
                            li class="text-sm text-gray-500" { "Phone: " (brand.phone) }
                            li class="text-sm text-gray-500" { "Email: " (brand.email) }
                        }
                    }
                    div {
                        h3 class="font-semibold mb-4" { "Follow Us" }
                        a href=(brand.instagram) target="_blank" rel="noopener noreferrer" class="text-gray-500 hover:text-orange-600" {
                            (PreEscaped(INSTAGRAM_ICON))
                            span class="sr-only" { "Instagram" }
                        }
                    }
                }
                div class="border-t mt-8 pt-8 flex flex-col md:flex-row justify-between items-center" {
                    p class="text-xs text-gray-500" {
                        "© " (ctx.year) " " (ctx.brand_name) ". All rights reserved."
                    }
                    div class="flex gap-4 mt-4 md:mt-0" {
                        a href="#" class="text-xs text-gray-500 hover:text-orange-600" { "Privacy Policy" }
                        a href="#" class="text-xs text-gray-500 hover:text-orange-600" { "Terms of Service" }
                    }
                }
            }
        }
    }
}
