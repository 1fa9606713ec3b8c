//! User reference handlers.
//!
//! Users are owned by the external identity subsystem; these endpoints
//! only sync the opaque reference the core keeps. Deleting one cascades
//! to their posts, comments, and follow edges.

use actix_web::{HttpResponse, web};

use murmur_core::domain::User;
use murmur_core::ports::{BaseRepository, UserRepository};
use murmur_shared::ApiResponse;
use murmur_shared::dto::{CreateUserRequest, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/users
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.username.trim().is_empty() {
        return Err(AppError::BadRequest("username must not be empty".to_string()));
    }

    let user = state.users.insert(User::new(req.username)).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(UserResponse::from(user))))
}

/// DELETE /api/users/{username}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let username = path.into_inner();

    let user = state
        .users
        .find_by_username(&username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user '{username}'")))?;

    state.users.delete(user.id).await?;

    Ok(HttpResponse::NoContent().finish())
}
