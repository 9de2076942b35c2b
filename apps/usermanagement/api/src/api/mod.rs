use axum::Router;

pub mod health;
pub mod users;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Returns a stateless Router; each domain router has its state applied.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(domain_users::entity::Model::URL, users::router(state))
}

/// Creates a router with the /ready endpoint that checks the database.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
