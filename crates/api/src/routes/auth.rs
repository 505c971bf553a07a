//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /register         -> register (public)
/// POST /login            -> login (public)
/// POST /refresh          -> refresh (public)
/// POST /logout           -> logout (requires auth)
/// GET  /me               -> own profile (requires auth)
/// PUT  /me               -> update own profile (requires auth)
/// POST /change-password  -> change own password (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me).put(auth::update_me))
        .route("/change-password", post(auth::change_password))
}
