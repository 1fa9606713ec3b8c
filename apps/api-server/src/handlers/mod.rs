//! HTTP handlers and route configuration.
//!
//! Routes are a thin JSON surface over the core services; they carry no
//! authentication of their own - the acting user arrives by name and is
//! trusted to have been resolved upstream.

mod feed;
mod follows;
mod groups;
mod health;
mod posts;
mod users;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/feed")
                    .route("", web::get().to(feed::landing))
                    .route("/all", web::get().to(feed::all))
                    .route("/group/{slug}", web::get().to(feed::by_group))
                    .route("/author/{username}", web::get().to(feed::by_author))
                    .route("/following/{username}", web::get().to(feed::following)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete))
                    .route("/{id}/comments", web::get().to(posts::comments))
                    .route("/{id}/comments", web::post().to(posts::add_comment)),
            )
            .service(
                web::scope("/groups")
                    .route("", web::post().to(groups::create))
                    .route("/{id}", web::put().to(groups::update))
                    .route("/{id}", web::delete().to(groups::delete)),
            )
            .service(
                web::scope("/users")
                    .route("", web::post().to(users::create))
                    .route("/{username}", web::delete().to(users::delete)),
            )
            .service(
                web::scope("/follows")
                    .route("", web::post().to(follows::create))
                    .route("/{user}/{author}", web::delete().to(follows::delete)),
            )
            .route("/admin/cache", web::delete().to(feed::clear_cache)),
    );
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::{App, test, web};

    use murmur_shared::dto::{PageResponse, PostResponse};

    use crate::state::AppState;

    fn state() -> AppState {
        AppState::in_memory(10, Duration::from_secs(20))
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(super::configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn health_endpoint_responds_ok() {
        let app = test_app!(state());

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn created_post_appears_in_the_all_feed() {
        let app = test_app!(state());

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({"username": "poet"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({
                "author": "poet",
                "text": "hello world",
                "group": null,
                "image": null,
            }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);

        let req = test::TestRequest::get().uri("/api/feed/all").to_request();
        let body: murmur_shared::ApiResponse<PageResponse<PostResponse>> =
            test::call_and_read_body_json(&app, req).await;
        let page = body.data.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].text, "hello world");
    }

    #[actix_web::test]
    async fn unknown_group_feed_is_404() {
        let app = test_app!(state());

        let req = test::TestRequest::get()
            .uri("/api/feed/group/nonexistent-slug")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn duplicate_username_is_409() {
        let app = test_app!(state());

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({"username": "twin"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({"username": "twin"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 409);
    }

    #[actix_web::test]
    async fn clearing_the_cache_refreshes_the_landing_feed() {
        let app = test_app!(state());

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({"username": "poet"}))
            .to_request();
        test::call_service(&app, req).await;

        // Empty snapshot gets cached on first read.
        let req = test::TestRequest::get().uri("/api/feed").to_request();
        let before = test::call_and_read_body(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({
                "author": "poet",
                "text": "fresh",
                "group": null,
                "image": null,
            }))
            .to_request();
        test::call_service(&app, req).await;

        // Still the stale snapshot within the TTL.
        let req = test::TestRequest::get().uri("/api/feed").to_request();
        let stale = test::call_and_read_body(&app, req).await;
        assert_eq!(before, stale);

        let req = test::TestRequest::delete().uri("/api/admin/cache").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 204);

        let req = test::TestRequest::get().uri("/api/feed").to_request();
        let fresh = test::call_and_read_body(&app, req).await;
        assert_ne!(before, fresh);
    }
}
