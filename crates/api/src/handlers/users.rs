//! Handlers for the `/users` resource (admin user management).
//!
//! Mutations require the `admin` role via [`RequireAdmin`]; the paginated
//! listing is also readable by `manager` via [`RequireManager`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use userhub_core::error::CoreError;
use userhub_core::pagination::{
    clamp_limit, clamp_page, page_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
use userhub_core::roles::Role;
use userhub_core::types::DbId;
use userhub_db::models::user::{CreateUser, UpdateUser, UserListFilter, UserResponse};
use userhub_db::repositories::{SessionRepo, UserRepo};
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::handlers::auth::MIN_PASSWORD_LENGTH;
use crate::middleware::rbac::{RequireAdmin, RequireManager};
use crate::response::{ApiResponse, PagedResponse, Pagination};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / query parameter types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /users`.
#[derive(Debug, Deserialize)]
pub struct ListUsersParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// Substring match against names and email.
    pub search: Option<String>,
    /// Exact role filter.
    pub role: Option<String>,
    #[serde(default)]
    pub include_inactive: bool,
    #[serde(default)]
    pub include_deleted: bool,
}

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "first_name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last_name must be 1-100 characters"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Request body for `PUT /users/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "first_name must be 1-100 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "last_name must be 1-100 characters"))]
    pub last_name: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

/// Request body for `POST /users/{id}/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/users
///
/// Paginated, filtered user listing. Manager or admin.
pub async fn list_users(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Query(params): Query<ListUsersParams>,
) -> AppResult<Json<PagedResponse<UserResponse>>> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = page_offset(page, limit);

    let filter = UserListFilter {
        search: params.search,
        role: params.role,
        include_inactive: params.include_inactive,
        include_deleted: params.include_deleted,
    };

    let users = UserRepo::list(&state.pool, &filter, limit, offset).await?;
    let total = UserRepo::count(&state.pool, &filter).await?;

    let data: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();

    Ok(Json(PagedResponse::ok(
        "Users",
        data,
        Pagination::new(page, limit, total),
    )))
}

/// POST /api/v1/users
///
/// Create a new user with an explicit role. Admin only. Returns 201.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let role = parse_role(&input.role)?;

    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email is already registered".into(),
        )));
    }

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        password_hash: hashed,
        role: role.as_str().to_string(),
    };
    let user = UserRepo::create(&state.pool, &create_dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("User created", UserResponse::from(&user))),
    ))
}

/// GET /api/v1/users/{id}
///
/// Get a single user by ID. 404 when missing or soft-deleted.
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(ApiResponse::ok("User", UserResponse::from(&user))))
}

/// PUT /api/v1/users/{id}
///
/// Partial update of profile fields, role, and active flag (not password).
/// Each successful update bumps the row's version counter.
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let role = match &input.role {
        Some(name) => Some(parse_role(name)?.as_str().to_string()),
        None => None,
    };

    let update_dto = UpdateUser {
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        role,
        is_active: input.is_active,
    };

    let user = UserRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(ApiResponse::ok(
        "User updated",
        UserResponse::from(&user),
    )))
}

/// DELETE /api/v1/users/{id}
///
/// Soft-delete a user and revoke their sessions. Returns 204 No Content.
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::soft_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    // A deleted account must not keep working refresh tokens.
    SessionRepo::revoke_all_for_user(&state.pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/users/{id}/restore
///
/// Clear the soft-delete marker. 404 if the user does not exist or is not
/// deleted.
pub async fn restore_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = UserRepo::restore(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(ApiResponse::ok(
        "User restored",
        UserResponse::from(&user),
    )))
}

/// POST /api/v1/users/{id}/reset-password
///
/// Admin-initiated password reset for a user. Revokes the user's sessions.
pub async fn reset_password(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<StatusCode> {
    validate_password_strength(&input.new_password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let updated = UserRepo::update_password(&state.pool, id, &hashed).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    SessionRepo::revoke_all_for_user(&state.pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate a role name against the closed role set.
fn parse_role(name: &str) -> AppResult<Role> {
    Role::parse(name).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Invalid role '{name}'. Valid roles: {}",
            Role::all_names().join(", ")
        )))
    })
}
