use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use serde::de::DeserializeOwned;
use wecredit_backend_rust::{
    app::{build_app, AppState},
    models::OtpPolicy,
    store::MemoryStore,
};

/// Build the full app on top of the given in-memory store
pub fn get_app(store: &MemoryStore, otp_policy: OtpPolicy) -> Router {
    let state = AppState::new(Arc::new(store.clone()), otp_policy);
    build_app(state)
}

pub fn build_post_request(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub fn build_get_request(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

pub async fn read_body(res: Response) -> String {
    let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn read_json<T: DeserializeOwned>(res: Response) -> T {
    let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
