use axum::{http::StatusCode, response::Response, Router};
use tower::ServiceExt;

use wecredit_backend_rust::models::{OtpResponse, RegisterResponse};

use crate::helper::helper::{build_get_request, build_post_request, read_json};

pub async fn register_user(app: Router, mobile: &str, fingerprint: &str) -> RegisterResponse {
    let body = format!(
        r#"{{"name": "abcd", "mobile": "{}", "address": "somewhere", "fingerprint": "{}"}}"#,
        mobile, fingerprint
    );
    let request = build_post_request("/register", &body);
    let res = app.oneshot(request).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let response: RegisterResponse = read_json(res).await;
    assert!(response.success);
    assert_eq!(response.message, "User registered successfully");
    assert_eq!(response.user.mobile, mobile);
    response
}

pub async fn request_otp(app: Router, mobile: &str) -> String {
    let path = format!("/otp?number={}", mobile);
    let res = app.oneshot(build_get_request(&path)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let response: OtpResponse = read_json(res).await;
    assert!(response.success);
    assert_eq!(response.otp.len(), 6);
    response.otp
}

pub async fn login(app: Router, mobile: &str, otp: &str, fingerprint: &str) -> Response {
    let body = format!(
        r#"{{"mobile": "{}", "otp": "{}", "fingerprint": "{}"}}"#,
        mobile, otp, fingerprint
    );
    app.oneshot(build_post_request("/login", &body))
        .await
        .unwrap()
}
