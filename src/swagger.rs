use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::ping::ping_handler,
        crate::handlers::default::default_route_handler,
        crate::handlers::user::register::register_user_handler,
        crate::handlers::user::otp::get_otp_handler,
        crate::handlers::user::login::login_handler,
    ),
    components(
        schemas(
            crate::models::RegisterUserReq,
            crate::models::LoginReq,

            crate::models::GenericResponse,
            crate::models::RegisterResponse,
            crate::models::OtpResponse,
            crate::models::LoginResponse,

            crate::models::PublicUser,
        )
    ),
    tags(
        (name = "Debugging API", description = "API for debugging purposes"),
        (name = "App User API", description = "API for user registration and otp login")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for path in ["/", "/ping", "/register", "/otp", "/login"] {
            assert!(
                paths.iter().any(|p| p.as_str() == path),
                "{path} missing from openapi doc"
            );
        }
    }

    #[test]
    fn test_openapi_error_bodies_use_generic_response() {
        let doc: serde_json::Value =
            serde_json::from_str(&ApiDoc::openapi().to_json().unwrap()).unwrap();
        let cases = [
            ("/register", "post", "400"),
            ("/otp", "get", "404"),
            ("/login", "post", "404"),
        ];
        for (path, method, status) in cases {
            let schema = &doc["paths"][path][method]["responses"][status]["content"]
                ["application/json"]["schema"]["$ref"];
            assert_eq!(schema, "#/components/schemas/GenericResponse", "{method} {path} {status}");
        }
    }
}
