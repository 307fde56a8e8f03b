use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use crate::auth::extractor::SESSION_COOKIE;
use crate::auth::session;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {}

#[derive(Template)]
#[template(path = "register.html")]
struct RegisterTemplate {}

fn signed_in(state: &SharedState, jar: &CookieJar) -> bool {
    jar.get(SESSION_COOKIE)
        .is_some_and(|c| session::decode_token(c.value(), &state.config.jwt_secret).is_ok())
}

pub async fn login_page(State(state): State<SharedState>, jar: CookieJar) -> Response {
    if signed_in(&state, &jar) {
        return Redirect::to("/").into_response();
    }

    let template = LoginTemplate {};
    Html(template.render().unwrap_or_default()).into_response()
}

pub async fn register_page(State(state): State<SharedState>, jar: CookieJar) -> Response {
    if signed_in(&state, &jar) {
        return Redirect::to("/").into_response();
    }

    let template = RegisterTemplate {};
    Html(template.render().unwrap_or_default()).into_response()
}
