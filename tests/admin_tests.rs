mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{body_json, get, get_with_token, MultipartBody, TestApp};
use game_vault::{
    models::AppRole,
    services::traffic,
    storage::Storage,
    store::CatalogStore,
};
use tower::ServiceExt;
use uuid::Uuid;

const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

fn required_fields() -> MultipartBody {
    MultipartBody::new()
        .text("title", "Star Forge")
        .text("description", "Build ships and explore")
        .text("download_link", "https://example.com/star-forge.zip")
}

fn assert_login_redirect(response: &axum::response::Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin/login");
}

#[tokio::test]
async fn test_dashboard_requires_login() {
    let app = TestApp::new();

    let response = app
        .app
        .clone()
        .oneshot(get("/api/v1/admin/dashboard"))
        .await
        .unwrap();
    assert_login_redirect(&response);

    let response = app
        .app
        .clone()
        .oneshot(get_with_token("/api/v1/admin/dashboard", "not-a-jwt"))
        .await
        .unwrap();
    assert_login_redirect(&response);
}

#[tokio::test]
async fn test_dashboard_requires_admin_role() {
    let app = TestApp::new();
    let user_id = Uuid::new_v4();
    app.store.grant_role(user_id, AppRole::User).await;

    let response = app
        .app
        .clone()
        .oneshot(get_with_token("/api/v1/admin/dashboard", &app.token_for(user_id)))
        .await
        .unwrap();
    assert_login_redirect(&response);
}

#[tokio::test]
async fn test_refresh_token_is_rejected() {
    let app = TestApp::new();
    let user_id = Uuid::new_v4();
    app.store.grant_role(user_id, AppRole::Admin).await;
    let token = app.jwt.generate_refresh_token(user_id, None).unwrap();

    let response = app
        .app
        .clone()
        .oneshot(get_with_token("/api/v1/admin/stats", &token))
        .await
        .unwrap();
    assert_login_redirect(&response);
}

#[tokio::test]
async fn test_dashboard_for_admin() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    app.store.record_visit(traffic::today()).await.unwrap();
    app.store.record_visit(traffic::today()).await.unwrap();

    let response = app
        .app
        .clone()
        .oneshot(get_with_token("/api/v1/admin/dashboard", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], "admin@example.com");
    assert_eq!(body["stats"]["daily"], 2);
    assert_eq!(body["stats"]["weekly"], 2);

    let response = app
        .app
        .clone()
        .oneshot(get_with_token("/api/v1/admin/stats", &token))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["daily"], 2);
}

#[tokio::test]
async fn test_upload_without_files_creates_one_game() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let request = required_fields()
        .text("min_requirements", "")
        .into_request("/api/v1/admin/games", Some(&token));
    let response = app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["title"], "Star Forge");
    assert_eq!(body["banner_url"], serde_json::Value::Null);
    assert_eq!(body["screenshots"], serde_json::json!([]));
    assert_eq!(body["min_requirements"], serde_json::Value::Null);
    assert_eq!(app.store.game_count().await, 1);
}

#[tokio::test]
async fn test_upload_with_assets() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let request = required_fields()
        .text("recommended_requirements", "OS: Windows 11\nMemory: 16 GB RAM")
        .file("banner", "cover art.png", "image/png", PNG)
        .file("screenshots", "shot1.png", "image/png", PNG)
        .file("screenshots", "shot2.jpg", "application/octet-stream", PNG)
        .into_request("/api/v1/admin/games", Some(&token));
    let response = app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    let banner = body["banner_url"].as_str().unwrap();
    assert!(banner.starts_with("http://cdn.test/assets/banners/"));
    assert!(banner.ends_with("_cover_art.png"));

    let screenshots = body["screenshots"].as_array().unwrap();
    assert_eq!(screenshots.len(), 2);
    assert!(screenshots[1].as_str().unwrap().ends_with("_shot2.jpg"));
    assert_eq!(body["recommended_requirements"], "OS: Windows 11\nMemory: 16 GB RAM");

    let path = banner.trim_start_matches("http://cdn.test/assets/");
    assert_eq!(app.storage.retrieve(path).await.unwrap(), PNG);

    // Stored objects are publicly readable.
    let response = app
        .app
        .clone()
        .oneshot(get(&format!("/assets/{path}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_empty_file_inputs_are_ignored() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let request = required_fields()
        .file("banner", "", "application/octet-stream", b"")
        .file("screenshots", "", "application/octet-stream", b"")
        .into_request("/api/v1/admin/games", Some(&token));
    let response = app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["banner_url"], serde_json::Value::Null);
    assert_eq!(body["screenshots"], serde_json::json!([]));
}

#[tokio::test]
async fn test_upload_missing_required_field() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let request = MultipartBody::new()
        .text("title", "Star Forge")
        .text("download_link", "https://example.com/star-forge.zip")
        .file("banner", "cover.png", "image/png", PNG)
        .into_request("/api/v1/admin/games", Some(&token));
    let response = app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Please fill in all required fields"));
    assert!(message.contains("description"));

    assert_eq!(app.store.game_count().await, 0);
    assert!(!app.storage.base_path().join("banners").exists());
}

#[tokio::test]
async fn test_upload_rejects_second_banner_and_non_images() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let request = required_fields()
        .file("banner", "a.png", "image/png", PNG)
        .file("banner", "b.png", "image/png", PNG)
        .into_request("/api/v1/admin/games", Some(&token));
    let response = app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = required_fields()
        .file("screenshots", "setup.exe", "application/x-msdownload", b"MZ")
        .into_request("/api/v1/admin/games", Some(&token));
    let response = app.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(app.store.game_count().await, 0);
}

#[tokio::test]
async fn test_upload_requires_admin() {
    let app = TestApp::new();

    let request = required_fields().into_request("/api/v1/admin/games", None);
    let response = app.app.clone().oneshot(request).await.unwrap();
    assert_login_redirect(&response);
    assert_eq!(app.store.game_count().await, 0);
}

#[tokio::test]
async fn test_logout_redirects_to_login() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/admin/logout")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.app.clone().oneshot(request).await.unwrap();
    assert_login_redirect(&response);
}
