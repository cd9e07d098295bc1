//! # Server Module
//!
//! The axum router and its handlers.
//!
//! Every page handler extracts the visitor's `Session`, asks the core gate
//! whether to render or redirect, and renders from the shared catalogs.
//! State is immutable after startup.
//!
//! ## Routes
//!
//! | Method | Path               | Handler               |
//! |--------|--------------------|-----------------------|
//! | GET    | `/`                | `home_page`           |
//! | GET    | `/dashboard`       | `dashboard_page`      |
//! | GET    | `/demo-dashboard`  | `demo_dashboard_page` |
//! | GET    | `/analysis`        | `analysis_page`       |
//! | GET    | `/upload`          | `upload_form`         |
//! | POST   | `/upload`          | `upload_submit`       |
//! | GET    | `/upload/progress` | `upload_progress`     |
//! | POST   | `/login`           | `login`               |
//! | POST   | `/logout`          | `logout`              |
//! | GET    | `/health`          | `health`              |

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use interviewai_core::{
    Access, AnalysisReport, Dashboard, DashboardVariant, Page, ProcessingTimeline,
    SampleAnalysis, Session, gate,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::forms::UploadForm;
use crate::progress::sse_response;
use crate::session::{self, CurrentSession};
use crate::views::{analysis, dashboard, home, layout, upload};

// =============================================================================
// STATE
// =============================================================================

/// Read-only data shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub personal: Dashboard,
    pub demo: Dashboard,
    pub report: AnalysisReport,
    pub sample: SampleAnalysis,
}

impl AppState {
    /// Build the catalogs for `config`.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            personal: Dashboard::build(DashboardVariant::Personal),
            demo: Dashboard::build(DashboardVariant::Demo),
            report: AnalysisReport::sample(),
            sample: SampleAnalysis::sample(),
        }
    }
}

type SharedState = Arc<AppState>;

// =============================================================================
// ROUTER
// =============================================================================

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/dashboard", get(dashboard_page))
        .route("/demo-dashboard", get(demo_dashboard_page))
        .route("/analysis", get(analysis_page))
        .route("/upload", get(upload_form).post(upload_submit))
        .route("/upload/progress", get(upload_progress))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Apply the gate for `page`, rendering with `render` only when allowed.
fn gated<F>(page: Page, session: Session, render: F) -> Result<Response, AppError>
where
    F: FnOnce() -> Result<String, AppError>,
{
    match gate(page, session) {
        Access::Render => Ok(Html(render()?).into_response()),
        Access::Redirect(target) => {
            debug!(from = %page, to = %target, "gate redirect");
            Ok(Redirect::to(target.path()).into_response())
        }
    }
}

// =============================================================================
// PAGES
// =============================================================================

async fn home_page(
    State(state): State<SharedState>,
    CurrentSession(session): CurrentSession,
) -> Response {
    Html(home::render(session, &state.sample)).into_response()
}

async fn dashboard_page(
    State(state): State<SharedState>,
    CurrentSession(session): CurrentSession,
) -> Result<Response, AppError> {
    gated(Page::Dashboard, session, || Ok(dashboard::render(&state.personal)?))
}

async fn demo_dashboard_page(
    State(state): State<SharedState>,
    CurrentSession(session): CurrentSession,
) -> Result<Response, AppError> {
    gated(Page::DemoDashboard, session, || Ok(dashboard::render(&state.demo)?))
}

async fn analysis_page(
    State(state): State<SharedState>,
    CurrentSession(session): CurrentSession,
) -> Result<Response, AppError> {
    gated(Page::Analysis, session, || Ok(analysis::render(&state.report)))
}

// =============================================================================
// UPLOAD FLOW
// =============================================================================

async fn upload_form(CurrentSession(session): CurrentSession) -> Result<Response, AppError> {
    gated(Page::Upload, session, || {
        Ok(upload::render_form(&UploadForm::default(), None))
    })
}

async fn upload_submit(
    State(state): State<SharedState>,
    CurrentSession(session): CurrentSession,
    Form(form): Form<UploadForm>,
) -> Result<Response, AppError> {
    if let Access::Redirect(target) = gate(Page::Upload, session) {
        return Ok(Redirect::to(target.path()).into_response());
    }

    if let Err(err) = form.validate() {
        debug!(error = %err, "upload form rejected");
        let html = upload::render_form(&form, Some(&err.to_string()));
        return Ok((err.status(), Html(html)).into_response());
    }

    info!("upload accepted, starting processing");
    let timeline = ProcessingTimeline::standard(state.config.timing);
    Ok(Html(upload::render_processing(&timeline)).into_response())
}

async fn upload_progress(
    State(state): State<SharedState>,
    CurrentSession(session): CurrentSession,
) -> Response {
    match gate(Page::Upload, session) {
        Access::Render => {
            let timeline = ProcessingTimeline::standard(state.config.timing);
            debug!(
                total_ms = timeline.total_duration_ms(),
                "progress stream opened"
            );
            sse_response(timeline).into_response()
        }
        Access::Redirect(target) => Redirect::to(target.path()).into_response(),
    }
}

// =============================================================================
// SESSION
// =============================================================================

async fn login(CurrentSession(mut session): CurrentSession) -> Result<Response, AppError> {
    session.login();
    let cookie = session::set_cookie(&session)?;
    info!("visitor logged in");
    Ok(([(SET_COOKIE, cookie)], Redirect::to(Page::Dashboard.path())).into_response())
}

async fn logout() -> Response {
    info!("visitor logged out");
    (
        [(SET_COOKIE, session::clear_cookie())],
        Redirect::to(Page::Home.path()),
    )
        .into_response()
}

// =============================================================================
// MISC
// =============================================================================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found() -> (StatusCode, Html<String>) {
    let body = r#"<main class="wrap center"><h1 class="title">Page not found</h1><p class="lead mb">There is nothing at this address.</p><a class="btn" href="/">Back to Home</a></main>"#;
    (StatusCode::NOT_FOUND, Html(layout::page("Not Found", body)))
}

// =============================================================================
// TESTS
// =============================================================================
