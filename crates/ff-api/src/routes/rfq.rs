//! RFQ lead-capture route

use crate::db::Lead;
use crate::AppState;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ff_core::rfq::SubmitThrottle;
use ff_core::{validate_form, FieldErrors, RfqForm, RfqResponse};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

const UNKNOWN_SOURCE: &str = "unknown";

#[derive(Error, Debug)]
pub enum RfqError {
    #[error("Malformed form data")]
    Malformed(#[from] MultipartError),

    #[error("{}", .0.first_message().unwrap_or("Invalid request"))]
    Invalid(FieldErrors),
}

impl IntoResponse for RfqError {
    fn into_response(self) -> Response {
        let status = match &self {
            RfqError::Malformed(e) => e.status(),
            RfqError::Invalid(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(RfqResponse::error(self.to_string()))).into_response()
    }
}

/// Accept a multipart RFQ.
///
/// Leads are recorded once per email inside the duplicate window. Without
/// a working lead store the client is told to fall back to mailto.
pub async fn submit_rfq(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<RfqResponse>, RfqError> {
    let (form, source) = read_form(multipart).await?;

    let submission = validate_form(&form, &source).map_err(|errors| {
        info!(source = %source, fields = errors.len(), "rejected invalid rfq");
        RfqError::Invalid(errors)
    })?;

    let Some(store) = state.leads.as_ref() else {
        warn!(source = %submission.source, "no lead store configured, asking client to use mailto");
        return Ok(Json(RfqResponse::fallback()));
    };

    let now = state.clock.now_ms();
    let key = submission.email.to_lowercase();
    let window_ms = state.config.duplicate_window_ms;

    // Held across the insert so concurrent duplicates are recorded once
    let mut recent = state.recent.lock().await;
    recent.retain(|_, throttle| throttle.remaining(now) > 0);

    if recent.get(&key).map_or(false, |t| t.remaining(now) > 0) {
        info!(source = %submission.source, "duplicate rfq acknowledged without recording");
        return Ok(Json(RfqResponse::success()));
    }

    let lead = Lead::from_submission(submission, chrono::Utc::now());
    match store.insert(&lead).await {
        Ok(()) => {
            recent.insert(key, SubmitThrottle::acquired(window_ms, now));
            info!(lead_id = %lead.id, source = %lead.source, "rfq recorded");
            Ok(Json(RfqResponse::success()))
        }
        Err(e) => {
            error!(source = %lead.source, error = %e, "failed to record rfq, asking client to use mailto");
            Ok(Json(RfqResponse::fallback()))
        }
    }
}

/// Collect the known text fields; unknown fields are skipped
async fn read_form(mut multipart: Multipart) -> Result<(RfqForm, String), RfqError> {
    let mut form = RfqForm::default();
    let mut source = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let target = match name.as_str() {
            "name" => &mut form.name,
            "email" => &mut form.email,
            "country" => &mut form.country,
            "message" => &mut form.message,
            "source" => &mut source,
            _ => continue,
        };
        *target = field.text().await?;
    }

    let source = source.trim();
    let source = if source.is_empty() { UNKNOWN_SOURCE } else { source };
    Ok((form, source.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::db::memory::MemoryLeadStore;
    use crate::db::LeadStore;
    use crate::{app, ApiConfig, AppState};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use ff_core::{ManualClock, RfqResponse};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    const BOUNDARY: &str = "ffrcboundary";

    fn config() -> ApiConfig {
        ApiConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            database_url: None,
            max_body_bytes: 64 * 1024,
            duplicate_window_ms: 8_000,
        }
    }

    fn multipart_body(fields: &[(&str, &str)]) -> String {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            ));
        }
        body.push_str(&format!("--{}--\r\n", BOUNDARY));
        body
    }

    fn jane() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", "Jane"),
            ("email", "test@example.com"),
            ("country", ""),
            ("message", "1000 pcs of FF-RC433-4K"),
            ("source", "hero_quote"),
        ]
    }

    async fn post(state: Arc<AppState>, fields: &[(&str, &str)]) -> (StatusCode, RfqResponse) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/rfq")
            .header("content-type", format!("multipart/form-data; boundary={}", BOUNDARY))
            .body(Body::from(multipart_body(fields)))
            .unwrap();

        let response = app(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn state_with(store: Arc<MemoryLeadStore>, clock: Arc<ManualClock>) -> Arc<AppState> {
        Arc::new(AppState::new(Some(store as Arc<dyn LeadStore>), clock, config()))
    }

    #[tokio::test]
    async fn test_valid_rfq_is_recorded() {
        let store = Arc::new(MemoryLeadStore::new());
        let state = state_with(store.clone(), Arc::new(ManualClock::new(0)));

        let (status, body) = post(state, &jane()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, RfqResponse::success());
        let leads = store.leads().await;
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].name, "Jane");
        assert_eq!(leads[0].country, None);
        assert_eq!(leads[0].source, "hero_quote");
    }

    #[tokio::test]
    async fn test_missing_name_is_rejected() {
        let store = Arc::new(MemoryLeadStore::new());
        let state = state_with(store.clone(), Arc::new(ManualClock::new(0)));

        let (status, body) = post(state, &[("email", "test@example.com"), ("source", "contact_page")]).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Please enter your name"));
        assert!(store.leads().await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected() {
        let state = state_with(Arc::new(MemoryLeadStore::new()), Arc::new(ManualClock::new(0)));
        let (status, body) = post(state, &[("name", "Jane"), ("email", "a@b")]).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.as_deref(), Some("Please enter a valid email address"));
    }

    #[tokio::test]
    async fn test_duplicate_within_window_recorded_once() {
        let store = Arc::new(MemoryLeadStore::new());
        let clock = Arc::new(ManualClock::new(0));
        let state = state_with(store.clone(), clock.clone());

        assert!(post(state.clone(), &jane()).await.1.success);
        clock.advance(3_000);
        let mut shouting = jane();
        shouting[1] = ("email", "TEST@example.com");
        assert!(post(state.clone(), &shouting).await.1.success);
        assert_eq!(store.leads().await.len(), 1);

        clock.advance(5_000);
        assert!(post(state, &jane()).await.1.success);
        assert_eq!(store.leads().await.len(), 2);
    }

    #[tokio::test]
    async fn test_no_store_answers_fallback() {
        let state = Arc::new(AppState::new(None, Arc::new(ManualClock::new(0)), config()));
        let (status, body) = post(state, &jane()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, RfqResponse::fallback());
    }

    #[tokio::test]
    async fn test_store_failure_answers_fallback() {
        let store = Arc::new(MemoryLeadStore::failing());
        let clock = Arc::new(ManualClock::new(0));
        let state = state_with(store.clone(), clock);

        let (_, body) = post(state.clone(), &jane()).await;
        assert_eq!(body, RfqResponse::fallback());

        // A failed write does not open a duplicate window
        let (_, body) = post(state, &jane()).await;
        assert_eq!(body, RfqResponse::fallback());
    }

    #[tokio::test]
    async fn test_missing_source_is_tagged_unknown() {
        let store = Arc::new(MemoryLeadStore::new());
        let state = state_with(store.clone(), Arc::new(ManualClock::new(0)));

        post(state, &[("name", "Jane"), ("email", "test@example.com"), ("utm", "x")]).await;
        assert_eq!(store.leads().await[0].source, "unknown");
    }

    #[tokio::test]
    async fn test_health_reports_store() {
        let state = Arc::new(AppState::new(None, Arc::new(ManualClock::new(0)), config()));
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["lead_store"], false);
    }
}
