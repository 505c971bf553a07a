pub mod auth;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                   register (public)
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
/// /auth/me                         get, update own profile
/// /auth/change-password            change own password
///
/// /users                           list (manager+), create (admin)
/// /users/{id}                      get, update, soft delete (admin)
/// /users/{id}/restore              restore soft-deleted user (admin)
/// /users/{id}/reset-password       admin password reset
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
}
