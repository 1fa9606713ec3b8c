//! Post and comment handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use murmur_shared::ApiResponse;
use murmur_shared::dto::{
    CommentResponse, CreateCommentRequest, CreatePostRequest, DeletePostRequest, PostResponse,
    UpdatePostRequest,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create_post(&req.author, &req.text, req.group.as_deref(), req.image)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(PostResponse::from(post))))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .update_post(path.into_inner(), &req.editor, &req.text, req.group.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostResponse::from(post))))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<DeletePostRequest>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .delete_post(path.into_inner(), &body.editor)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/posts/{id}/comments
pub async fn comments(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let comments = state.posts.comments(path.into_inner()).await?;
    let body: Vec<CommentResponse> = comments.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// POST /api/posts/{id}/comments
pub async fn add_comment(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let comment = state
        .posts
        .add_comment(path.into_inner(), &req.author, &req.text)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(CommentResponse::from(comment))))
}
