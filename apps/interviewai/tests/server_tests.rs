//! Integration tests for the InterviewAI HTTP server.
//!
//! Drives the full router in-process with axum-test.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use axum::http::header::{COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use interviewai::config::ServerConfig;
use interviewai::server::{AppState, create_router};
use interviewai::session::cookie_pair;
use interviewai_core::{ProcessingTiming, Session};

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Server with a processing flow fast enough for tests.
fn test_server() -> TestServer {
    let config = ServerConfig::default().with_timing(ProcessingTiming::new(4, 2));
    TestServer::new(create_router(AppState::new(config))).unwrap()
}

/// Cookie header for a logged-in visitor.
fn member_cookie() -> HeaderValue {
    HeaderValue::from_str(&cookie_pair(&Session::member()).unwrap()).unwrap()
}

fn location(response: &axum_test::TestResponse) -> String {
    response.header(LOCATION).to_str().unwrap().to_string()
}

// =============================================================================
// GATE
// =============================================================================

#[tokio::test]
async fn test_home_renders_for_everyone() {
    let server = test_server();

    let guest = server.get("/").await;
    guest.assert_status_ok();
    assert!(guest.text().contains("InterviewAI"));

    let member = server.get("/").add_header(COOKIE, member_cookie()).await;
    member.assert_status_ok();
    assert!(member.text().contains(r#"action="/logout""#));
}

#[tokio::test]
async fn test_guest_dashboard_redirects_to_demo() {
    let server = test_server();
    let response = server.get("/dashboard").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/demo-dashboard");
}

#[tokio::test]
async fn test_member_demo_dashboard_redirects_to_dashboard() {
    let server = test_server();
    let response = server
        .get("/demo-dashboard")
        .add_header(COOKIE, member_cookie())
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
}

#[tokio::test]
async fn test_guest_upload_redirects_home() {
    let server = test_server();

    let response = server.get("/upload").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = server.get("/upload/progress").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_analysis_is_public() {
    let server = test_server();
    let response = server.get("/analysis").await;
    response.assert_status_ok();
    assert!(response.text().contains("Analysis Complete"));
}

#[tokio::test]
async fn test_malformed_cookie_is_treated_as_guest() {
    let server = test_server();
    let response = server
        .get("/dashboard")
        .add_header(COOKIE, HeaderValue::from_static("interviewai_session=garbage!"))
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/demo-dashboard");
}

// =============================================================================
// DASHBOARDS
// =============================================================================

#[tokio::test]
async fn test_member_dashboard_links_only_new_entry() {
    let server = test_server();
    let response = server
        .get("/dashboard")
        .add_header(COOKIE, member_cookie())
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert_eq!(html.matches(r#"href="/analysis""#).count(), 1);
    assert_eq!(html.matches(">New</span>").count(), 1);
    assert!(html.contains("Your Performance Analytics"));
}

#[tokio::test]
async fn test_demo_dashboard_shows_banner() {
    let server = test_server();
    let response = server.get("/demo-dashboard").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Demo Dashboard - Sign up to access your personal analytics"));
    assert!(html.contains("Google"));
    assert!(!html.contains(r#"href="/analysis""#));
}

// =============================================================================
// SESSION
// =============================================================================

#[tokio::test]
async fn test_login_sets_cookie_and_redirects() {
    let server = test_server();
    let response = server.post("/login").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");

    let cookie = response.header(SET_COOKIE).to_str().unwrap().to_string();
    assert!(cookie.starts_with("interviewai_session="));

    // The issued cookie opens the personal dashboard.
    let pair = cookie.split(';').next().unwrap().to_string();
    let dashboard = server
        .get("/dashboard")
        .add_header(COOKIE, HeaderValue::from_str(&pair).unwrap())
        .await;
    dashboard.assert_status_ok();
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let server = test_server();
    let response = server
        .post("/logout")
        .add_header(COOKIE, member_cookie())
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    let cookie = response.header(SET_COOKIE).to_str().unwrap().to_string();
    assert!(cookie.contains("Max-Age=0"));
}

// =============================================================================
// UPLOAD FLOW
// =============================================================================

#[tokio::test]
async fn test_upload_form_renders_for_member() {
    let server = test_server();
    let response = server.get("/upload").add_header(COOKIE, member_cookie()).await;
    response.assert_status_ok();
    assert!(response.text().contains("MP4, MOV, AVI up to 100MB"));
}

#[tokio::test]
async fn test_upload_missing_email_is_422() {
    let server = test_server();
    let response = server
        .post("/upload")
        .add_header(COOKIE, member_cookie())
        .form(&[("name", "Ada Lovelace"), ("email", "")])
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let html = response.text();
    assert!(html.contains("Please enter your email."));
    assert!(html.contains(r#"value="Ada Lovelace""#));
}

#[tokio::test]
async fn test_upload_valid_form_starts_processing() {
    let server = test_server();
    let response = server
        .post("/upload")
        .add_header(COOKIE, member_cookie())
        .form(&[("name", "Ada Lovelace"), ("email", "ada@example.com")])
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Processing your interview..."));
    assert!(html.contains("/upload/progress"));
}

#[tokio::test]
async fn test_progress_stream_visits_steps_and_redirects() {
    let server = test_server();
    let response = server
        .get("/upload/progress")
        .add_header(COOKIE, member_cookie())
        .await;
    response.assert_status_ok();

    let body = response.text();
    assert_eq!(body.matches("event: step\n").count(), 4);
    assert!(body.contains(r#""percent":100"#));
    assert!(body.contains("event: completed"));

    let step = body.find("Analysis complete!").unwrap();
    let redirect = body.find("event: redirect").unwrap();
    assert!(step < redirect);
    assert!(body.contains(r#""location":"/dashboard""#));
}

// =============================================================================
// MISC
// =============================================================================

#[tokio::test]
async fn test_health() {
    let server = test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = test_server();
    let response = server.get("/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page not found"));
}
