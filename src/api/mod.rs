// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        AssistRequest, CreateWillRequest, FileCategory, Language, LoginRequest,
        SendMessageRequest, SignupRequest, StoredFile, UpdateWillRequest, UserId, Will,
    },
    state::AppState,
};

pub mod assist;
pub mod auth;
pub mod files;
pub mod health;
pub mod messages;
pub mod users;
pub mod wills;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/user/profile", get(users::profile))
        .route("/wills/create", post(wills::create_will))
        .route("/wills/list", get(wills::list_wills))
        .route(
            "/wills/{will_id}",
            get(wills::get_will).put(wills::update_will),
        )
        .route(
            "/files/upload/{will_id}",
            post(files::upload_file).layer(DefaultBodyLimit::max(crate::config::MAX_UPLOAD_BYTES)),
        )
        .route("/files/list/{will_id}", get(files::list_files))
        .route("/files/download/{file_id}", get(files::download_file))
        .route("/files/{file_id}", delete(files::delete_file))
        .route("/ai/assist", post(assist::ai_assist))
        .route("/messages/send", post(messages::send_message))
        .route("/health", get(health::health))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::signup,
        auth::login,
        users::profile,
        wills::create_will,
        wills::list_wills,
        wills::get_will,
        wills::update_will,
        files::upload_file,
        files::list_files,
        files::download_file,
        files::delete_file,
        assist::ai_assist,
        messages::send_message,
        health::health
    ),
    components(
        schemas(
            UserId,
            Language,
            FileCategory,
            Will,
            StoredFile,
            SignupRequest,
            LoginRequest,
            CreateWillRequest,
            UpdateWillRequest,
            AssistRequest,
            SendMessageRequest,
            auth::AuthResponse,
            users::ProfileResponse,
            wills::CreateWillResponse,
            wills::WillListResponse,
            wills::WillResponse,
            wills::UpdateWillResponse,
            files::UploadResponse,
            files::FileListResponse,
            files::DeleteFileResponse,
            assist::AssistResponse,
            messages::SendMessageResponse,
            health::HealthResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Signup and login"),
        (name = "Users", description = "User profile"),
        (name = "Wills", description = "Will document management"),
        (name = "Files", description = "Will attachments"),
        (name = "Assistance", description = "Drafting assistance pass-through"),
        (name = "Messages", description = "Message send stub"),
        (name = "Health", description = "Liveness")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body, Bytes};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    const BOUNDARY: &str = "scenario-boundary";

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let dir = TempDir::new().unwrap();
        let app = router(AppState::for_tests(dir.path()));
        let _ = app.into_make_service();
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body)
    }

    async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = send(app, request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn upload_request(
        uri: &str,
        token: &str,
        file_type: &str,
        filename: &str,
        content: &[u8],
    ) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file_type\"\r\n\r\n{file_type}\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: text/plain\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn signup(app: &Router, email: &str, mobile: &str) -> String {
        let (status, body) = send_json(
            app,
            json_request(
                "POST",
                "/api/auth/signup",
                None,
                json!({
                    "email": email,
                    "mobile": mobile,
                    "password": "p1",
                    "confirm_password": "p1",
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["access_token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_is_open_without_a_token() {
        let dir = TempDir::new().unwrap();
        let app = router(AppState::for_tests(dir.path()));

        let (status, body) = send_json(&app, get_request("/api/health", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn protected_routes_reject_missing_and_bad_tokens() {
        let dir = TempDir::new().unwrap();
        let app = router(AppState::for_tests(dir.path()));

        let (status, _) = send(&app, get_request("/api/wills/list", None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, get_request("/api/wills/list", Some("garbage"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, get_request("/api/user/profile", None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn signup_create_upload_download_delete_scenario() {
        let dir = TempDir::new().unwrap();
        let app = router(AppState::for_tests(dir.path()));
        let content: &[u8] = b"To my family: the house goes to Maya.";

        // signup(a@x.com, 555) -> token
        let token = signup(&app, "a@x.com", "555").await;

        // create_will -> W
        let (status, body) = send_json(
            &app,
            json_request(
                "POST",
                "/api/wills/create",
                Some(&token),
                json!({"title": "W1", "language": "english", "content": "c"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let will_id = body["will_id"].as_str().unwrap().to_string();

        // upload(doc.txt, documents) -> F
        let (status, body) = send_json(
            &app,
            upload_request(
                &format!("/api/files/upload/{will_id}"),
                &token,
                "documents",
                "doc.txt",
                content,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filename"], "doc.txt");
        let file_id = body["file_id"].as_str().unwrap().to_string();

        // list shows exactly F
        let (status, body) = send_json(
            &app,
            get_request(&format!("/api/files/list/{will_id}"), Some(&token)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["files"].as_array().unwrap().len(), 1);

        // download(F) returns the original bytes under the original name
        let response = app
            .clone()
            .oneshot(get_request(
                &format!("/api/files/download/{file_id}"),
                Some(&token),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"doc.txt\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], content);

        // delete(F) -> success; download(F) -> 404
        let (status, _) = send(
            &app,
            json_request(
                "DELETE",
                &format!("/api/files/{file_id}"),
                Some(&token),
                json!({}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            &app,
            get_request(&format!("/api/files/download/{file_id}"), Some(&token)),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn video_upload_larger_than_default_body_limit_is_accepted() {
        let dir = TempDir::new().unwrap();
        let app = router(AppState::for_tests(dir.path()));
        let token = signup(&app, "a@x.com", "555").await;

        let (_, body) = send_json(
            &app,
            json_request(
                "POST",
                "/api/wills/create",
                Some(&token),
                json!({"title": "W1", "language": "english", "content": "c"}),
            ),
        )
        .await;
        let will_id = body["will_id"].as_str().unwrap().to_string();

        // 5 MiB, past axum's 2 MiB default body limit.
        let content = vec![0xABu8; 5 * 1024 * 1024];
        let (status, body) = send_json(
            &app,
            upload_request(
                &format!("/api/files/upload/{will_id}"),
                &token,
                "video",
                "home.mp4",
                &content,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["size"], content.len() as u64);
    }

    #[tokio::test]
    async fn cross_user_update_is_not_found_but_no_token_is_unauthorized() {
        let dir = TempDir::new().unwrap();
        let app = router(AppState::for_tests(dir.path()));

        let owner_token = signup(&app, "a@x.com", "555").await;
        let other_token = signup(&app, "b@x.com", "666").await;

        let (_, body) = send_json(
            &app,
            json_request(
                "POST",
                "/api/wills/create",
                Some(&owner_token),
                json!({"title": "W1", "language": "english", "content": "c"}),
            ),
        )
        .await;
        let will_id = body["will_id"].as_str().unwrap().to_string();

        // Valid token, wrong owner: 404, never 403.
        let (status, _) = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/wills/{will_id}"),
                Some(&other_token),
                json!({"title": "stolen"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // No token at all: 401 before any ownership logic.
        let (status, _) = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/wills/{will_id}"),
                None,
                json!({"title": "stolen"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn login_round_trip_over_http() {
        let dir = TempDir::new().unwrap();
        let app = router(AppState::for_tests(dir.path()));
        signup(&app, "a@x.com", "555").await;

        let (status, body) = send_json(
            &app,
            json_request(
                "POST",
                "/api/auth/login",
                None,
                json!({"username": "a@x.com", "password": "p1"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let token = body["access_token"].as_str().unwrap();

        let (status, body) = send_json(&app, get_request("/api/user/profile", Some(token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "a@x.com");
        assert_eq!(body["mobile"], "555");

        let (status, _) = send_json(
            &app,
            json_request(
                "POST",
                "/api/auth/login",
                None,
                json!({"username": "a@x.com", "password": "wrong"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
