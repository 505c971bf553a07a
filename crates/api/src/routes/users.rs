//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                     -> list (manager or admin)
/// POST   /                     -> create (admin)
/// GET    /{id}                 -> get (admin)
/// PUT    /{id}                 -> update (admin)
/// DELETE /{id}                 -> soft delete (admin)
/// POST   /{id}/restore         -> restore (admin)
/// POST   /{id}/reset-password  -> reset password (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/{id}/restore", post(users::restore_user))
        .route("/{id}/reset-password", post(users::reset_password))
}
