//! HTTP service for readability scoring, article analysis and page audits.
//!
//! All scoring work is CPU-bound and runs on the blocking thread pool.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use lesbar_core::formatters::ScoreOutput;
use lesbar_core::links::domain_of;
use lesbar_core::{
    ArticleAnalysis, AuditReport, ComplexityAssessment, HixScorer, LesbarError, ScoringProfile, analyze_article,
    assess_complexity, audit_html, score_legacy,
};
use serde::Deserialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

/// Shared state: the scorer built from the configured profile.
#[derive(Clone)]
pub struct AppState {
    scorer: Arc<HixScorer>,
}

impl AppState {
    pub fn new(profile: ScoringProfile) -> Self {
        Self { scorer: Arc::new(HixScorer::with_profile(profile)) }
    }

    fn profile(&self) -> &ScoringProfile {
        self.scorer.profile()
    }
}

#[derive(Debug, Deserialize)]
pub struct ReadabilityRequest {
    pub text: String,
    #[serde(default)]
    pub legacy: bool,
}

#[derive(Debug, Deserialize)]
pub struct ComplexityRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ArticleRequest {
    pub url: String,
    pub html: String,
    /// Domain treated as internal; the URL's host when absent.
    pub base_domain: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AuditRequest {
    pub url: String,
    pub html: String,
    /// Page load time in seconds, if measured by the caller.
    pub load_time: Option<f64>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/readability", post(score_text))
        .route("/api/complexity", post(score_complexity))
        .route("/api/articles/analyze", post(analyze))
        .route("/api/audit", post(audit))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    let timestamp = OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default();
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": timestamp
    }))
}

async fn score_text(
    State(state): State<AppState>, Json(payload): Json<ReadabilityRequest>,
) -> Result<Json<ScoreOutput>, AppError> {
    let scorer = state.scorer.clone();

    let output = tokio::task::spawn_blocking(move || ScoreOutput {
        verdict: scorer.score(&payload.text),
        legacy: payload.legacy.then(|| score_legacy(&payload.text)),
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    tracing::debug!(hix = output.verdict.hix, "scored text");
    Ok(Json(output))
}

async fn score_complexity(Json(payload): Json<ComplexityRequest>) -> Result<Json<ComplexityAssessment>, AppError> {
    let assessment = tokio::task::spawn_blocking(move || assess_complexity(&payload.text))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(assessment))
}

fn check_url(url: &str) -> Result<(), AppError> {
    url::Url::parse(url)
        .map(|_| ())
        .map_err(|e| AppError::BadRequest(format!("Invalid URL '{}': {}", url, e)))
}

async fn analyze(
    State(state): State<AppState>, Json(payload): Json<ArticleRequest>,
) -> Result<Json<ArticleAnalysis>, AppError> {
    check_url(&payload.url)?;
    let profile = state.profile().clone();
    let base_domain = payload.base_domain.clone().unwrap_or_else(|| domain_of(&payload.url));

    tracing::info!(url = %payload.url, "analyzing article");

    let analysis =
        tokio::task::spawn_blocking(move || analyze_article(&payload.url, &payload.html, &base_domain, &profile))
            .await
            .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(analysis))
}

async fn audit(Json(payload): Json<AuditRequest>) -> Result<Json<AuditReport>, AppError> {
    tracing::info!(url = %payload.url, "auditing page");

    let report = tokio::task::spawn_blocking(move || audit_html(&payload.url, &payload.html, payload.load_time))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(report))
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unprocessable(String),
    Internal(String),
}

impl From<LesbarError> for AppError {
    fn from(err: LesbarError) -> Self {
        match err {
            LesbarError::InvalidUrl(_) => AppError::BadRequest(err.to_string()),
            LesbarError::NoContent => AppError::Unprocessable(err.to_string()),
            _ => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use tower::ServiceExt;

    const ARTICLE_HTML: &str = r#"
        <html><head><title>Offene Daten</title></head>
        <body>
            <nav><a href="/">Start</a></nav>
            <article>
                <p>Viele Städte veröffentlichen offene Daten. Offene Daten helfen Bürgern und Verwaltung.
                   Die Digitalisierung der Verwaltung braucht klare Regeln. Mehr dazu
                   <a href="/themen/digitalisierung">hier</a>.</p>
            </article>
        </body></html>
    "#;

    fn app() -> Router {
        create_router(AppState::new(ScoringProfile::heuristic()))
    }

    async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "healthy");
        assert!(json["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn test_readability() {
        let (status, json) = post_json(
            "/api/readability",
            serde_json::json!({ "text": "Das ist ein kurzer Satz. Er ist leicht.", "legacy": true }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["hix"].is_number());
        assert_eq!(json["bucket"], "very_easy");
        assert!(json["legacy"]["hix"].is_number());
    }

    #[tokio::test]
    async fn test_readability_empty_text_is_unscored() {
        let (status, json) = post_json("/api/readability", serde_json::json!({ "text": "" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["hix"], 0.0);
        assert!(json["bucket"].is_null());
        assert!(json.get("legacy").is_none());
    }

    #[tokio::test]
    async fn test_readability_missing_field() {
        let (status, _) = post_json("/api/readability", serde_json::json!({})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_complexity() {
        let (status, json) =
            post_json("/api/complexity", serde_json::json!({ "text": "Dies ist ein Test. Das ist einfach." })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["score"], 1);
    }

    #[tokio::test]
    async fn test_analyze_article() {
        let (status, json) = post_json(
            "/api/articles/analyze",
            serde_json::json!({ "url": "https://example.de/blog/offene-daten", "html": ARTICLE_HTML }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "Offene Daten");
        assert_eq!(json["internal_links"].as_array().unwrap().len(), 2);
        assert!(json["readability"]["hix"].is_number());
    }

    #[tokio::test]
    async fn test_analyze_article_too_short() {
        let (status, json) = post_json(
            "/api/articles/analyze",
            serde_json::json!({ "url": "https://example.de/blog/kurz", "html": "<p>Kurz.</p>" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_analyze_invalid_url() {
        let (status, _) = post_json(
            "/api/articles/analyze",
            serde_json::json!({ "url": "keine-url", "html": ARTICLE_HTML }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_audit() {
        let (status, json) = post_json(
            "/api/audit",
            serde_json::json!({ "url": "https://example.de/blog/offene-daten", "html": ARTICLE_HTML, "load_time": 0.3 }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["score"].is_number());
        assert_eq!(json["technical"]["https"], true);
        assert_eq!(json["technical"]["load_time"], 0.3);
    }

    #[tokio::test]
    async fn test_audit_relative_url() {
        let (status, json) =
            post_json("/api/audit", serde_json::json!({ "url": "/blog/offene-daten", "html": ARTICLE_HTML })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("Invalid URL"));
    }
}
