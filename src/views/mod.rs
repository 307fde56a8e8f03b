pub mod auth;
pub mod records;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(records::index))
        .route("/login", get(auth::login_page))
        .route("/register", get(auth::register_page))
        .route("/users", get(users::index))
}
