//! Group handlers (administrative).

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use murmur_shared::ApiResponse;
use murmur_shared::dto::{CreateGroupRequest, GroupResponse, UpdateGroupRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/groups
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateGroupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let group = state
        .groups
        .create_group(&req.title, &req.slug, &req.description)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(GroupResponse::from(group))))
}

/// PUT /api/groups/{id} - edits title and description; the slug is
/// stable once the group exists.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateGroupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let group = state
        .groups
        .update_group(path.into_inner(), &req.title, &req.description)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(GroupResponse::from(group))))
}

/// DELETE /api/groups/{id} - posts in the group survive with their
/// group reference cleared.
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.groups.delete_group(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
