//! End-to-end smoke tests for the full scoreboardd stack.
//!
//! Each test spins up the complete application (in-memory store, real event
//! bus, real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use scoreboard_adapter_http_axum::router;
use scoreboard_adapter_http_axum::state::AppState;
use scoreboard_adapter_storage_memory::InMemoryMatchStore;
use scoreboard_app::event_bus::InProcessEventBus;
use scoreboard_app::services::scoreboard_service::ScoreboardService;
use scoreboard_domain::team::TeamNamePolicy;
use tower::ServiceExt;

/// Build a fully-wired router backed by a fresh in-memory store.
fn app_with_policy(policy: TeamNamePolicy) -> axum::Router {
    let service = ScoreboardService::new(InMemoryMatchStore::new(), InProcessEventBus::new(16))
        .with_name_policy(policy);
    router::build(AppState::new(service))
}

fn app() -> axum::Router {
    app_with_policy(TeamNamePolicy::Strict)
}

fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn teams(home: &str, away: &str) -> String {
    serde_json::json!({ "home_team": home, "away_team": away }).to_string()
}

fn score(home: &str, away: &str, home_score: i32, away_score: i32) -> String {
    serde_json::json!({
        "home_team": home,
        "away_team": away,
        "home_score": home_score,
        "away_score": away_score,
    })
    .to_string()
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn start(app: &axum::Router, home: &str, away: &str) -> (StatusCode, serde_json::Value) {
    send(app, json_request("POST", "/api/matches", teams(home, away))).await
}

async fn finish(app: &axum::Router, home: &str, away: &str) -> (StatusCode, serde_json::Value) {
    send(app, json_request("DELETE", "/api/matches", teams(home, away))).await
}

async fn summary(app: &axum::Router) -> Vec<(String, u64)> {
    let (status, body) = send(
        app,
        Request::builder()
            .uri("/api/summary")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body.as_array()
        .unwrap()
        .iter()
        .map(|game| {
            (
                format!(
                    "{} {}",
                    game["home_team"].as_str().unwrap(),
                    game["away_team"].as_str().unwrap()
                ),
                game["total_score"].as_u64().unwrap(),
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// API: full lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_match_lifecycle() {
    let app = app();

    let (status, body) = start(&app, "Spain", "Brazil").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["home_score"], 0);
    assert_eq!(body["away_score"], 0);

    let (status, body) = send(
        &app,
        json_request("PUT", "/api/matches/score", score("Spain", "Brazil", 10, 2)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_score"], 12);

    assert_eq!(summary(&app).await, vec![("Spain Brazil".to_string(), 12)]);

    let (status, _) = finish(&app, "Spain", "Brazil").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = finish(&app, "Spain", "Brazil").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "MATCH_NOT_FOUND");

    assert!(summary(&app).await.is_empty());
}

#[tokio::test]
async fn should_reject_duplicate_start_with_conflict() {
    let app = app();

    let (status, _) = start(&app, "Spain", "Brazil").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = start(&app, "Spain", "Brazil").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "MATCH_ALREADY_IN_PROGRESS");
    assert_eq!(summary(&app).await.len(), 1);
}

#[tokio::test]
async fn should_rank_summary_by_total_then_recency() {
    let app = app();
    for (home, away, home_score, away_score) in [
        ("Mexico", "Canada", 0, 5),
        ("Spain", "Brazil", 10, 2),
        ("Germany", "France", 2, 2),
        ("Uruguay", "Italy", 6, 6),
        ("Argentina", "Australia", 3, 1),
    ] {
        let (status, _) = start(&app, home, away).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) = send(
            &app,
            json_request("PUT", "/api/matches/score", score(home, away, home_score, away_score)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(
        summary(&app).await,
        vec![
            ("Uruguay Italy".to_string(), 12),
            ("Spain Brazil".to_string(), 12),
            ("Mexico Canada".to_string(), 5),
            ("Argentina Australia".to_string(), 4),
            ("Germany France".to_string(), 4),
        ]
    );
}

#[tokio::test]
async fn should_report_duplicate_team_names() {
    let app = app();

    let (status, body) = start(&app, "Spain", "spain").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "DUPLICATE_TEAM_NAMES");
    assert_eq!(body["field"], "teams");
}

#[tokio::test]
async fn should_leave_board_unchanged_when_updating_unknown_match() {
    let app = app();
    start(&app, "Spain", "Brazil").await;

    let (status, _) = send(
        &app,
        json_request("PUT", "/api/matches/score", score("Mexico", "Canada", 1, 0)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(summary(&app).await, vec![("Spain Brazil".to_string(), 0)]);
}

// ---------------------------------------------------------------------------
// Team name policy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_digits_in_names_when_strict() {
    let app = app();

    let (status, body) = start(&app, "Spain B", "Brazil 2").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "INVALID_MATCH_STATE");
}

#[tokio::test]
async fn should_accept_digits_in_names_when_relaxed() {
    let app = app_with_policy(TeamNamePolicy::Relaxed);

    let (status, body) = start(&app, "Spain B", "Brazil 2").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["away_team"], "Brazil 2");
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_publish_events_for_http_transitions() {
    let bus = Arc::new(InProcessEventBus::new(16));
    let mut events = bus.subscribe();
    let service = ScoreboardService::new(InMemoryMatchStore::new(), Arc::clone(&bus));
    let app = router::build(AppState::new(service));

    start(&app, "Spain", "Brazil").await;
    send(
        &app,
        json_request("PUT", "/api/matches/score", score("Spain", "Brazil", 1, 0)),
    )
    .await;

    assert_eq!(events.recv().await.unwrap().name(), "match_started");
    let updated = events.recv().await.unwrap();
    assert_eq!(updated.name(), "score_updated");
    assert_eq!(updated.game().home_score(), 1);
}
