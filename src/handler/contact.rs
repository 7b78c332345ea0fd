//! Booking form submission
//!
//! `POST /contact/` with a url-encoded body. The pairs are bound onto a
//! fresh [`BookingForm`], submitted, and the contact page is rendered
//! again with the outcome.

use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::{Request, StatusCode};

use crate::booking::{BookingForm, SubmitOutcome};
use crate::config::AppState;
use crate::http::{self, SiteResponse};
use crate::logger;
use crate::pages::RenderContext;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub async fn handle_submission<B>(req: Request<B>, state: &AppState) -> SiteResponse
where
    B: Body<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    let limit = usize::try_from(state.config.http.max_body_size).unwrap_or(usize::MAX);
    let body = match Limited::new(req.into_body(), limit).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            logger::log_error(&format!("Booking form body exceeds {limit} bytes"));
            return http::build_413_response();
        }
        Err(e) => {
            logger::log_warning(&format!("Failed to read booking form body: {e}"));
            return http::build_400_response();
        }
    };

    let mut form = BookingForm::new();
    for (name, value) in url::form_urlencoded::parse(&body) {
        form.update(&name, &value);
    }

    let mut acknowledgments: Vec<String> = Vec::new();
    let outcome = form.submit(&mut acknowledgments);
    let ctx = RenderContext::resolve(state).await;

    match outcome {
        SubmitOutcome::Accepted(_) => {
            let notice = acknowledgments.first().map(String::as_str);
            http::build_html_response(StatusCode::OK, ctx.render_contact(form.draft(), notice), false)
        }
        SubmitOutcome::Blocked { missing } => {
            let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
            logger::log_info(&format!(
                "Booking form blocked, missing: {}",
                names.join(", ")
            ));
            http::build_html_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                ctx.render_contact(form.draft(), None),
                false,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::Full;

    fn state(max_body_size: u64) -> AppState {
        let mut cfg = Config::defaults().unwrap();
        cfg.site.static_dir = "/nonexistent-static-dir".to_string();
        cfg.http.max_body_size = max_body_size;
        AppState::new(&cfg).unwrap()
    }

    fn post(body: &'static str) -> Request<Full<Bytes>> {
        Request::post("/contact/")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Full::new(Bytes::from_static(body.as_bytes())))
            .unwrap()
    }

    async fn body_text(resp: SiteResponse) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_accepted_submission_resets_fields() {
        let resp = handle_submission(
            post("name=Ada+Obi&email=ada%40example.com&eventType=wedding&guestCount=120"),
            &state(65_536),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let html = body_text(resp).await;
        assert_eq!(html.matches("Thank you for your message!").count(), 1);
        assert!(!html.contains("Ada Obi"));
        assert!(html.contains(r#"<option value="" selected>"#));
    }

    #[tokio::test]
    async fn test_blocked_submission_keeps_draft() {
        let resp = handle_submission(post("name=Ada+Obi&phone=555"), &state(65_536)).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let html = body_text(resp).await;
        assert!(!html.contains("Thank you for your message!"));
        assert!(html.contains(r#"value="Ada Obi""#));
        assert!(html.contains(r#"value="555""#));
    }

    #[tokio::test]
    async fn test_oversized_body() {
        let resp = handle_submission(post("name=Ada&email=a%40b.c&message=long"), &state(8)).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
