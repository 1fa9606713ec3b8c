//! Follow edge handlers.

use actix_web::{HttpResponse, web};

use murmur_shared::ApiResponse;
use murmur_shared::dto::{FollowRequest, FollowResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/follows - create-if-absent, so repeating the request never
/// errors.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<FollowRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let follow = state.follows.follow(&req.user, &req.author).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(FollowResponse::from(follow))))
}

/// DELETE /api/follows/{user}/{author}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (user, author) = path.into_inner();

    state.follows.unfollow(&user, &author).await?;

    Ok(HttpResponse::NoContent().finish())
}
