use axum::{
    extract::{Request, State},
    http::{HeaderMap, Method},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use studio_cms_core::auth::{authorize, Access, SessionClaims, SESSION_COOKIE};

use crate::state::AppState;

pub const LOGIN_PATH: &str = "/admin/login";
pub const LOGOUT_PATH: &str = "/admin/logout";
pub const DASHBOARD_PATH: &str = "/admin";

/// Session token from the session cookie, else from a bearer header.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().to_string())
}

/// Verified claims of the request's session, if any. Bad or expired
/// tokens count as no session.
pub fn session_claims(state: &AppState, headers: &HeaderMap) -> Option<SessionClaims> {
    let token = session_token(headers)?;
    match state.sessions().verify(&token) {
        Ok(claims) => Some(claims),
        Err(err) => {
            tracing::debug!(error = %err, "ignoring invalid session token");
            None
        }
    }
}

/// Guards every `/admin` route.
///
/// - the login page is open and receives the resolved `Access`, but an
///   admin viewing it is sent to the dashboard
/// - without a session the request goes to the login page
/// - a signed-in non-admin goes to the public home page
pub async fn admin_gate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path();
    if path == LOGOUT_PATH {
        return next.run(req).await;
    }
    let is_login = path == LOGIN_PATH;

    let claims = session_claims(&state, req.headers());
    let access = authorize(state.profiles(), claims.as_ref()).await;

    if is_login {
        if matches!(access, Access::Admin(_)) && req.method() == Method::GET {
            return Redirect::to(DASHBOARD_PATH).into_response();
        }
        req.extensions_mut().insert(access);
        return next.run(req).await;
    }

    match access {
        Access::Anonymous => Redirect::to(LOGIN_PATH).into_response(),
        Access::NotAdmin(profile_id) => {
            tracing::debug!(%profile_id, "non-admin sent away from admin panel");
            Redirect::to("/").into_response()
        }
        Access::Admin(profile) => {
            req.extensions_mut().insert(profile);
            next.run(req).await
        }
    }
}
