#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use hireflow_api::config::ServerConfig;
use hireflow_api::router::build_app_router;
use hireflow_api::state::AppState;
use hireflow_core::transition::TransitionPolicy;
use hireflow_core::types::DbId;
use hireflow_db::models::application::CreateApplication;
use hireflow_db::models::candidate::CreateCandidate;
use hireflow_db::models::interview::CreateInterview;
use hireflow_db::models::interview_flow::{CreateInterviewFlow, CreateInterviewStep};
use hireflow_db::models::position::CreatePosition;
use hireflow_db::InMemoryPipelineStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// The database URL is never dialled: tests run on the in-memory store.
pub fn test_config(transition_policy: TransitionPolicy) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        transition_policy,
    }
}

/// Build the full application router over `store` with the default policy.
pub fn build_test_app(store: InMemoryPipelineStore) -> Router {
    build_test_app_with_policy(store, TransitionPolicy::default())
}

/// Build the full application router over `store`, with the same middleware
/// stack production uses.
pub fn build_test_app_with_policy(
    store: InMemoryPipelineStore,
    transition_policy: TransitionPolicy,
) -> Router {
    let config = test_config(transition_policy);
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config).unwrap()
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// Ids of the seeded hiring board.
///
/// "Senior Full Stack Developer" runs on the flow
/// `[Screening, Technical, Offer]`:
///
/// - John Doe sits in Technical with scores 8, 9, 7.
/// - Jane Smith sits in Screening with scores 7, 8.
/// - Bob Johnson sits in Screening with one unscored interview.
///
/// "UX Designer" shares the flow and has no applications. Sam Loner has no
/// application at all. `foreign_step` belongs to a second, unrelated flow.
pub struct Board {
    pub store: InMemoryPipelineStore,
    pub position: DbId,
    pub empty_position: DbId,
    pub screening: DbId,
    pub technical: DbId,
    pub offer: DbId,
    pub foreign_step: DbId,
    pub john: DbId,
    pub jane: DbId,
    pub bob: DbId,
    pub loner: DbId,
}

pub fn seed_board() -> Board {
    let store = InMemoryPipelineStore::new();

    let flow = store
        .insert_interview_flow(&CreateInterviewFlow {
            description: "Standard development process".to_string(),
        })
        .unwrap();
    let step = |flow_id: DbId, name: &str, order_index: i32| {
        store
            .insert_interview_step(&CreateInterviewStep {
                interview_flow_id: flow_id,
                name: name.to_string(),
                order_index,
            })
            .unwrap()
            .id
    };
    let screening = step(flow.id, "Screening", 1);
    let technical = step(flow.id, "Technical", 2);
    let offer = step(flow.id, "Offer", 3);

    let other_flow = store
        .insert_interview_flow(&CreateInterviewFlow {
            description: "Internship process".to_string(),
        })
        .unwrap();
    let foreign_step = step(other_flow.id, "Intro call", 1);

    let position = |title: &str| {
        store
            .insert_position(&CreatePosition {
                title: title.to_string(),
                interview_flow_id: flow.id,
                status: None,
            })
            .unwrap()
            .id
    };
    let senior = position("Senior Full Stack Developer");
    let designer = position("UX Designer");

    let candidate = |first: &str, last: &str| {
        store
            .insert_candidate(&CreateCandidate {
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            })
            .unwrap()
            .id
    };
    let john = candidate("John", "Doe");
    let jane = candidate("Jane", "Smith");
    let bob = candidate("Bob", "Johnson");
    let loner = candidate("Sam", "Loner");

    let apply = |candidate_id: DbId, step_id: DbId, scores: &[Option<i32>]| {
        let application = store
            .insert_application(&CreateApplication {
                position_id: senior,
                candidate_id,
                application_date: None,
                current_interview_step: step_id,
                notes: None,
            })
            .unwrap();
        for score in scores {
            store
                .insert_interview(&CreateInterview {
                    application_id: application.id,
                    interview_step_id: step_id,
                    interview_date: None,
                    result: None,
                    score: *score,
                    notes: None,
                })
                .unwrap();
        }
    };
    apply(john, technical, &[Some(8), Some(9), Some(7)]);
    apply(jane, screening, &[Some(7), Some(8)]);
    apply(bob, screening, &[None]);

    Board {
        store,
        position: senior,
        empty_position: designer,
        screening,
        technical,
        offer,
        foreign_step,
        john,
        jane,
        bob,
        loner,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request and return the response.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body and return the response.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    put_raw(app, uri, "application/json", body.to_string()).await
}

/// Send a PUT request with an arbitrary body and content type.
pub async fn put_raw(app: Router, uri: &str, content_type: &str, body: String) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
