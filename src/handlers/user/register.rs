use axum::{extract::State, Json};

use crate::{
    app::AppState,
    models::{GenericResponse, RegisterResponse, RegisterUserReq, User},
    store::AuthStore,
    utils::{AppError, ValidatedBody},
};

/// Register a new user
///
/// Persist the user with its device fingerprint. Mobile must not be registered already.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterUserReq,
    responses(
        (status = 200, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Invalid input", body = GenericResponse),
        (status = 500, description = "Mobile already registered or store failure", body = GenericResponse)
    ),
    tag = "App User API"
)]
pub async fn register_user_handler(
    State(state): State<AppState>,
    ValidatedBody(body): ValidatedBody<RegisterUserReq>,
) -> Result<Json<RegisterResponse>, AppError> {
    let user = register_user(state.store.as_ref(), body).await?;
    let response = RegisterResponse {
        success: true,
        message: "User registered successfully".to_owned(),
        user: user.into(),
    };
    Ok(Json(response))
}

/// Insert the validated user. Duplicate mobiles are rejected by the store.
pub async fn register_user(
    store: &dyn AuthStore,
    body: RegisterUserReq,
) -> Result<User, AppError> {
    let user = store.insert_user(body.into()).await?;
    tracing::info!("Registered user {} with mobile {}", user.id, user.mobile);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use mockall::predicate::function;

    use super::*;
    use crate::{
        handlers::user::test_support::sample_user,
        models::NewUser,
        store::{MockAuthStore, StoreError},
    };

    fn body() -> RegisterUserReq {
        RegisterUserReq {
            name: "abcd".to_owned(),
            mobile: "9999999999".to_owned(),
            address: "somewhere".to_owned(),
            fingerprint: "F1".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_register_user() {
        let mut store = MockAuthStore::new();
        store
            .expect_insert_user()
            .with(function(|user: &NewUser| {
                user.mobile == "9999999999" && user.fingerprint == "F1"
            }))
            .times(1)
            .returning(|user| Ok(user.into_user(1)));
        let user = register_user(&store, body()).await.unwrap();
        assert_eq!(user, sample_user("9999999999", "F1"));
    }

    #[tokio::test]
    async fn test_register_user_conflict() {
        let mut store = MockAuthStore::new();
        store
            .expect_insert_user()
            .times(1)
            .returning(|user| Err(crate::store::duplicate_mobile(&user.mobile)));
        let result = register_user(&store, body()).await;
        match result {
            Err(AppError::Persistence(StoreError::Conflict(msg))) => {
                assert!(msg.contains("9999999999"))
            }
            other => panic!("AppError::Persistence should be received, got {other:?}"),
        }
    }
}
