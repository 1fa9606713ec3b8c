//! Feed listing handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use murmur_core::feed::FeedView;
use murmur_shared::ApiResponse;
use murmur_shared::dto::{PageResponse, PostResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// A page number that does not parse serves page 1, matching the
    /// pagination helper's handling of absent pages.
    fn number(&self) -> Option<usize> {
        self.page.as_deref().and_then(|p| p.parse().ok())
    }
}

/// GET /api/feed - the cached landing snapshot (first page of the all
/// feed). May be stale for up to the configured TTL after a write.
pub async fn landing(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blob = state.feed.landing_snapshot().await?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(blob))
}

/// GET /api/feed/all?page=N
pub async fn all(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    list(&state, FeedView::All, query.number()).await
}

/// GET /api/feed/group/{slug}?page=N
pub async fn by_group(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    list(&state, FeedView::Group(path.into_inner()), query.number()).await
}

/// GET /api/feed/author/{username}?page=N
pub async fn by_author(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    list(&state, FeedView::Author(path.into_inner()), query.number()).await
}

/// GET /api/feed/following/{username}?page=N
pub async fn following(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    list(&state, FeedView::Following(path.into_inner()), query.number()).await
}

/// DELETE /api/admin/cache - drop the landing snapshot ahead of expiry.
pub async fn clear_cache(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.feed.clear_snapshot().await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn list(state: &AppState, view: FeedView, page: Option<usize>) -> AppResult<HttpResponse> {
    let page = state.feed.list(&view, page).await?;
    let body: PageResponse<PostResponse> = page.into();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}
