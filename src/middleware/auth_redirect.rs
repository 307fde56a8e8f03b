use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

/// Middleware that redirects 401 responses to `/login` for browser requests.
/// Layered over session-gated routes only, so a failed POST /login still
/// surfaces its message instead of looping.
pub async fn redirect_unauthorized(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    if response.status() == StatusCode::UNAUTHORIZED {
        Redirect::to("/login").into_response()
    } else {
        response
    }
}
