// tests/support/helpers.rs
use axum::Router;
use axum::body::Body;
use axum::http::{Request, header::CONTENT_TYPE};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;
use vidshare_core::application::services::ApplicationServices;
use vidshare_core::infrastructure::repositories::memory::{
    FixedClock, InMemoryVideoStore, sample_profile, sample_video,
};
use vidshare_core::presentation::http::{routes::build_router, state::HttpState};

pub const USER_ID_HEADER: &str = "x-user-id";

/// Router backed by in-memory repositories, plus the store for seeding and
/// white-box assertions.
pub fn make_test_router() -> (Arc<InMemoryVideoStore>, Router) {
    let store = Arc::new(InMemoryVideoStore::new());
    let services = Arc::new(ApplicationServices::new(
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(FixedClock::new()),
    ));
    let router = build_router(HttpState { services });
    (store, router)
}

/// Router with one seeded video (id 1) and one seeded profile (id 3, "alice").
pub fn make_seeded_router() -> (Arc<InMemoryVideoStore>, Router) {
    let (store, router) = make_test_router();
    store.insert_video(sample_video(1));
    store.insert_profile(sample_profile(3, "alice"));
    (store, router)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_as(uri: &str, user_id: i64) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(USER_ID_HEADER, user_id.to_string())
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, user_id: i64, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(USER_ID_HEADER, user_id.to_string())
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
