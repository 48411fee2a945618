use axum::{extract::State, routing::get, routing::post, Extension, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use studio_cms_core::auth::{login, Access, LoginOutcome, SESSION_COOKIE};

use crate::error::ApiResult;
use crate::middleware::admin_gate::{DASHBOARD_PATH, LOGIN_PATH, LOGOUT_PATH};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(LOGIN_PATH, get(login_page).post(sign_in))
        .route(LOGOUT_PATH, post(sign_out))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub redirect_to: &'static str,
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build()
}

fn cleared_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

/// Reached only without an admin session; admins are redirected by the gate.
/// A signed-in non-admin is signed out here.
async fn login_page(
    Extension(access): Extension<Access>,
    jar: CookieJar,
) -> (CookieJar, Json<Value>) {
    let jar = match access {
        Access::NotAdmin(profile_id) => {
            tracing::info!(%profile_id, "clearing non-admin session on login page");
            jar.remove(cleared_cookie())
        }
        _ => jar,
    };
    (jar, Json(json!({ "authenticated": false })))
}

async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    let outcome = login(state.profiles(), state.sessions(), &body.email, &body.password).await?;

    Ok(match outcome {
        LoginOutcome::Admin { token, .. } => (
            jar.add(session_cookie(token)),
            Json(LoginResponse {
                redirect_to: DASHBOARD_PATH,
            }),
        ),
        LoginOutcome::NotAdmin => (
            jar.remove(cleared_cookie()),
            Json(LoginResponse { redirect_to: "/" }),
        ),
    })
}

async fn sign_out(jar: CookieJar) -> (CookieJar, Json<LoginResponse>) {
    (
        jar.remove(cleared_cookie()),
        Json(LoginResponse {
            redirect_to: LOGIN_PATH,
        }),
    )
}
