use maud::{html, Markup};

use super::hero::Hero;
use super::{Page, RenderContext};
use crate::booking::{BookingDraft, BookingField, EVENT_TYPES};

const INPUT: &str = "w-full rounded-md border border-gray-300 p-2";
const LABEL: &str = "block text-sm font-medium mb-1";

fn input(draft: &BookingDraft, field: BookingField, label: &str, kind: &str, placeholder: Option<&str>) -> Markup {
    let name = field.name();
    html! {
        div {
            label for=(name) class=(LABEL) { (label) }
            input id=(name) name=(name) type=(kind) value=(draft.get(field)) class=(INPUT) placeholder=[placeholder] required[field.is_required()];
        }
    }
}

fn event_type_select(draft: &BookingDraft) -> Markup {
    let selected = draft.get(BookingField::EventType);
    let name = BookingField::EventType.name();
    html! {
        div {
            label for=(name) class=(LABEL) { "Event Type" }
            select id=(name) name=(name) class=(INPUT) {
                @for (value, label) in std::iter::once(("", "Select event type")).chain(EVENT_TYPES) {
                    option value=(value) selected[value == selected] { (label) }
                }
            }
        }
    }
}

fn form(draft: &BookingDraft) -> Markup {
    let message = BookingField::Message.name();
    html! {
        form method="post" action="/contact/" class="space-y-6" {
            div class="grid md:grid-cols-2 gap-4" {
                (input(draft, BookingField::Name, "Full Name", "text", None))
                (input(draft, BookingField::Email, "Email", "email", None))
            }
            (input(draft, BookingField::Phone, "Phone Number", "tel", None))
            div class="grid md:grid-cols-2 gap-4" {
                (event_type_select(draft))
                (input(draft, BookingField::GuestCount, "Number of Guests", "number", Some("e.g., 50")))
            }
            (input(draft, BookingField::EventDate, "Event Date", "date", None))
            div {
                label for=(message) class=(LABEL) { "Message" }
                textarea id=(message) name=(message) rows="4" class=(INPUT) placeholder="Tell us about your event or ask any questions..." {
                    (draft.get(BookingField::Message))
                }
            }
            button type="submit" class="w-full rounded-md bg-orange-600 py-3 font-medium text-white hover:bg-orange-700" {
                "Send Message"
            }
        }
    }
}

/// `notice` is the acknowledgment to show after an accepted submission
pub fn render(ctx: &RenderContext<'_>, draft: &BookingDraft, notice: Option<&str>) -> Markup {
    let brand = &ctx.content.brand;

    let hero = Hero::new("Contact Us")
        .subtitle("Get in Touch for Catering & Events")
        .render(ctx.header_image.as_deref());

    let body = html! {
        (hero)
        section class="py-16 px-4" {
            div class="container mx-auto max-w-6xl" {
                @if let Some(notice) = notice {
                    div role="status" class="mb-8 rounded-md border border-green-300 bg-green-50 p-4 text-green-800" {
                        (notice)
                    }
                }
                div class="grid lg:grid-cols-2 gap-12" {
                    div class="rounded-lg border bg-white p-6" {
                        h2 class="text-2xl font-bold mb-6" { "Book Catering or Ask Questions" }
                        (form(draft))
                    }
                    div class="space-y-8" {
                        div class="rounded-lg border bg-white p-6 space-y-6" {
                            h2 class="text-2xl font-bold" { "Get in Touch" }
                            div {
                                h3 class="font-semibold" { "Phone" }
                                p class="text-gray-500" { (brand.phone) }
                            }
                            div {
                                h3 class="font-semibold" { "Email" }
                                p class="text-gray-500" { (brand.email) }
                            }
                        }
                        div class="rounded-lg border bg-white p-6 space-y-6" {
                            h2 class="text-2xl font-bold" { "Find Us at Markets" }
                            @for market in &ctx.content.markets {
                                div {
                                    h3 class="font-semibold" { (market.name) }
                                    p class="text-gray-500 mb-2" { (market.location) }
                                    p class="text-sm text-gray-500" { (market.schedule) }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    super::layout::render(ctx, "Contact Us", Some(Page::Contact), body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_binds_draft_values() {
        let draft = BookingDraft {
            name: "Ada \"Chef\" Obi".to_string(),
            event_type: "wedding".to_string(),
            message: "<b>hi</b> & bye".to_string(),
            ..BookingDraft::default()
        };
        let html = form(&draft).into_string();
        assert!(html.contains(r#"value="Ada &quot;Chef&quot; Obi""#));
        assert!(html.contains(r#"<option value="wedding" selected>Wedding</option>"#));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt; &amp; bye</textarea>"));
    }

    #[test]
    fn test_required_attributes() {
        let html = form(&BookingDraft::default()).into_string();
        assert!(html.contains(r#"name="name" type="text" value="" class="w-full rounded-md border border-gray-300 p-2" required>"#));
        assert!(html.contains(r#"name="email" type="email""#));
        assert!(html.contains(r#"type="tel" value="" class="w-full rounded-md border border-gray-300 p-2">"#));
        assert!(html.contains(r#"placeholder="e.g., 50">"#));
        assert!(html.contains(r#"<option value="" selected>Select event type</option>"#));
    }
}
