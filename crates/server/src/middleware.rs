//! Access control for the admin section. Runs only on admin-prefixed paths.
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use service::session::{resolve_context, REFRESH_COOKIE, SESSION_COOKIE};

use crate::state::AppState;

pub const LOGIN_PATH: &str = "/admin/login";
pub const DASHBOARD_PATH: &str = "/admin";

#[derive(Debug, PartialEq, Eq)]
pub enum Gate {
    Allow,
    ToDashboard,
    ToLogin,
    ClearAndToLogin,
}

/// Redirect decision over the two observations: "has a session" and "the
/// session subject holds the admin role".
pub fn evaluate_gate(is_login_page: bool, has_session: bool, has_role: bool) -> Gate {
    if is_login_page {
        if has_session && has_role {
            Gate::ToDashboard
        } else {
            Gate::Allow
        }
    } else if !has_session {
        Gate::ToLogin
    } else if !has_role {
        Gate::ClearAndToLogin
    } else {
        Gate::Allow
    }
}

pub async fn admin_gate(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let cookie_header = req
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let ctx =
        resolve_context(&state.db, state.sessions.as_ref(), cookie_header.as_deref()).await;
    let (has_session, has_role) = match &ctx {
        Some(ctx) => (true, ctx.is_admin),
        None => (false, false),
    };

    match evaluate_gate(path == LOGIN_PATH, has_session, has_role) {
        Gate::Allow => next.run(req).await,
        Gate::ToDashboard => Redirect::to(DASHBOARD_PATH).into_response(),
        Gate::ToLogin => Redirect::to(LOGIN_PATH).into_response(),
        Gate::ClearAndToLogin => {
            // Session exists but carries no role: drop its cookies on the way out.
            let mut res = Redirect::to(LOGIN_PATH).into_response();
            for name in [SESSION_COOKIE, REFRESH_COOKIE] {
                let cookie = format!("{}=; Path=/; Max-Age=0; HttpOnly", name);
                if let Ok(value) = header::HeaderValue::from_str(&cookie) {
                    res.headers_mut().append(header::SET_COOKIE, value);
                }
            }
            res
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_page_with_full_access_goes_to_dashboard() {
        assert_eq!(evaluate_gate(true, true, true), Gate::ToDashboard);
    }

    #[test]
    fn login_page_renders_without_session_or_role() {
        assert_eq!(evaluate_gate(true, false, false), Gate::Allow);
        assert_eq!(evaluate_gate(true, true, false), Gate::Allow);
    }

    #[test]
    fn protected_path_without_session_redirects_to_login() {
        assert_eq!(evaluate_gate(false, false, false), Gate::ToLogin);
    }

    #[test]
    fn protected_path_without_role_clears_session() {
        assert_eq!(evaluate_gate(false, true, false), Gate::ClearAndToLogin);
    }

    #[test]
    fn protected_path_with_full_access_is_allowed() {
        assert_eq!(evaluate_gate(false, true, true), Gate::Allow);
    }
}
