use axum::routing::{get, post};
use axum::Router;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    constants::*,
    handlers::*,
    models::OtpPolicy,
    store::SharedStore,
    swagger::ApiDoc,
};

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub otp_policy: OtpPolicy,
}

impl AppState {
    pub fn new(store: SharedStore, otp_policy: OtpPolicy) -> Self {
        Self { store, otp_policy }
    }
}

pub fn build_app(state: AppState) -> Router {
    tracing::debug!("Initializing the app");
    let timeout = Duration::from_secs(REQUEST_TIMEOUT_SECS);
    let api_routes: Router = Router::new()
        .route("/", get(default_route_handler))
        .route("/ping", get(ping_handler))
        .route("/register", post(register_user_handler))
        .route("/otp", get(get_otp_handler))
        .route("/login", post(login_handler))
        .with_state(state);
    let swagger = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    api_routes
        .merge(swagger)
        .fallback(global_404_handler)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
}
