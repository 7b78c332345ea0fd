use maud::{html, Markup};

use super::html::{button_link, OUTLINE_BUTTON, PRIMARY_BUTTON};
use super::RenderContext;

fn error_body(heading: &str, message: &str, code: Option<u16>, actions: Markup) -> Markup {
    html! {
        div class="flex flex-col items-center justify-center min-h-[70vh] bg-orange-50 px-4 text-center" {
            @if let Some(code) = code {
                h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-4" { (code) }
            }
            h2 class="text-2xl md:text-3xl font-semibold text-gray-800 mb-6" { (heading) }
            p class="text-lg text-gray-600 max-w-md mb-8" { (message) }
            div class="flex flex-col sm:flex-row gap-4" { (actions) }
        }
    }
}

pub fn not_found(ctx: &RenderContext<'_>) -> Markup {
    let actions = html! {
        (button_link("/", "Return Home", PRIMARY_BUTTON))
        (button_link("/menu/", "View Our Menu", OUTLINE_BUTTON))
    };
    let body = error_body(
        "Page Not Found",
        "The page you're looking for doesn't exist or has been moved.",
        Some(404),
        actions,
    );
    super::layout::render(ctx, "Page Not Found", None, body)
}

pub fn server_error(ctx: &RenderContext<'_>) -> Markup {
    let actions = html! {
        // a plain reload stands in for "try again"
        (button_link("", "Try Again", PRIMARY_BUTTON))
        (button_link("/", "Return Home", OUTLINE_BUTTON))
    };
    let body = error_body(
        "Something went wrong!",
        "We apologize for the inconvenience. Please try again or return to the homepage.",
        None,
        actions,
    );
    super::layout::render(ctx, "Error", None, body)
}
