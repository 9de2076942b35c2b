use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{IdPath, JsonBody};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::UserResult;
use crate::models::User;
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, get_user, create_user, update_user, delete_user),
    components(schemas(User)),
    tags(
        (name = entity::Model::TAG, description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the user router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_users).post(create_user).put(update_user),
        )
        .route("/{id}", get(get_user).delete(delete_user))
        .with_state(shared_service)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 204, description = "No users stored"),
        (status = 500, description = "Storage failure")
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Response> {
    let users = service.list_users().await?;

    if users.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(users).into_response())
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "No user with this id"),
        (status = 500, description = "Storage failure")
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = User,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Blank or malformed e-mail, or unreadable body"),
        (status = 415, description = "Body is not declared as JSON"),
        (status = 500, description = "Storage failure, including duplicate or over-long e-mail")
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    JsonBody(user): JsonBody<User>,
) -> UserResult<StatusCode> {
    service.create_user(user).await?;
    Ok(StatusCode::CREATED)
}

/// Replace the user identified by the body's `id`
#[utoipa::path(
    put,
    path = "",
    tag = entity::Model::TAG,
    request_body = User,
    responses(
        (status = 200, description = "User saved"),
        (status = 400, description = "Blank or malformed e-mail, or unreadable body"),
        (status = 415, description = "Body is not declared as JSON"),
        (status = 500, description = "Storage failure, including duplicate or over-long e-mail")
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    JsonBody(user): JsonBody<User>,
) -> UserResult<StatusCode> {
    service.update_user(user).await?;
    Ok(StatusCode::OK)
}

/// Delete a user by ID
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted, or was already absent"),
        (status = 400, description = "Id is not an integer"),
        (status = 500, description = "Storage failure")
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<StatusCode> {
    service.delete_user(id).await?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::repository::MockUserRepository;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use mockall::predicate::eq;
    use serde_json::json;
    use tower::ServiceExt;

    fn app(repo: MockUserRepository) -> Router {
        router(UserService::new(repo))
    }

    fn json_request(method: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> axum::body::Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_create_valid_user_saves_once() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .withf(|u| u.id == 3 && u.email == "thabo.pebane@gmail.com")
            .times(1)
            .returning(|user| Ok(user));

        let response = app(repo)
            .oneshot(json_request(
                "POST",
                json!({
                    "id": 3,
                    "firstName": "Thabo",
                    "lastName": "Pebane",
                    "email": "thabo.pebane@gmail.com"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_blank_email_never_saves() {
        let mut repo = MockUserRepository::new();
        repo.expect_save().never();

        let response = app(repo)
            .oneshot(json_request(
                "POST",
                json!({ "firstName": "", "lastName": "", "email": "" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_malformed_email_never_saves() {
        let mut repo = MockUserRepository::new();
        repo.expect_save().never();

        let response = app(repo)
            .oneshot(json_request(
                "POST",
                json!({ "firstName": "Thabo", "lastName": "Pebane", "email": "thabo.pebane" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_valid_user_saves_once() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .withf(|u| u.id == 1 && u.last_name == "Mokoena")
            .times(1)
            .returning(|user| Ok(user));

        let response = app(repo)
            .oneshot(json_request(
                "PUT",
                json!({
                    "id": 1,
                    "firstName": "Thabo",
                    "lastName": "Mokoena",
                    "email": "thabo@example.com"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_update_invalid_email_never_saves() {
        let mut repo = MockUserRepository::new();
        repo.expect_save().never();

        let response = app(repo)
            .oneshot(json_request("PUT", json!({ "id": 1, "email": "   " })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_save_failure_is_empty_500() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|_| Err(UserError::Storage("unique violation".to_string())));

        let response = app(repo)
            .oneshot(json_request(
                "POST",
                json!({ "id": 2, "email": "taken@example.com" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_calls_repository_once() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete_by_id()
            .with(eq(99))
            .times(1)
            .returning(|_| Ok(()));

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_present_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(User::new(id, "Thabo", "Pebane", "thabo@example.com"))));

        let response = app(repo)
            .oneshot(Request::builder().uri("/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let user: User = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(user.email, "thabo@example.com");
    }

    #[tokio::test]
    async fn test_list_failure_is_empty_500() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all()
            .returning(|| Err(UserError::Storage("connection refused".to_string())));

        let response = app(repo)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_bytes(response).await.is_empty());
    }
}
