pub mod auth;
pub mod records;
pub mod users;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

/// Unauthenticated form actions. No 401-redirect layer here: a failed login
/// must surface its message, not bounce back to the form.
pub fn auth_routes() -> Router<SharedState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

/// Actions that require an established session.
pub fn session_routes() -> Router<SharedState> {
    Router::new()
        .route("/add", post(records::add))
        .route("/users/add", post(users::add))
        .route("/invoice/{id}", get(records::invoice))
        .route("/logout", get(auth::logout))
}
