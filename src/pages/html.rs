//! Small markup components shared by the page renderers

use maud::{html, Markup};

/// `<a>` styled as a call-to-action button
pub fn button_link(href: &str, label: &str, class: &str) -> Markup {
    html! {
        a href=(href) class={ "inline-flex items-center justify-center rounded-md px-8 py-3 text-lg font-medium " (class) } {
            (label)
        }
    }
}

pub const PRIMARY_BUTTON: &str = "bg-orange-600 text-white hover:bg-orange-700";
pub const OUTLINE_BUTTON: &str = "border border-orange-600 text-orange-600 hover:bg-orange-50";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_link() {
        let html = button_link("/menu/", "View Our Menu", PRIMARY_BUTTON).into_string();
        assert!(html.starts_with(r#"<a href="/menu/""#));
        assert!(html.contains("bg-orange-600"));
        assert!(html.ends_with(">View Our Menu</a>"));
    }

    #[test]
    fn test_button_link_escapes_label_and_href() {
        let html = button_link(r#"/x?a="1"&b=2"#, "Rice & <Beans>", OUTLINE_BUTTON).into_string();
        assert!(html.contains(r#"href="/x?a=&quot;1&quot;&amp;b=2""#));
        assert!(html.contains(">Rice &amp; &lt;Beans&gt;</a>"));
    }
}
