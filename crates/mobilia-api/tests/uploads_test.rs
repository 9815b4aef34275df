//! Image upload endpoint integration tests.
//!
//! Run with: `cargo test -p mobilia-api --test uploads_test`

mod helpers;

use helpers::auth::{bearer, expired_session_token};
use helpers::{fixtures, setup_test_app, upload_form};
use mobilia_core::models::Bucket;
use mobilia_storage::parse_object_url;
use uuid::Uuid;

#[tokio::test]
async fn health_is_public() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn upload_without_token_is_unauthorized() {
    let app = setup_test_app().await;

    let form = upload_form(
        "productId",
        Uuid::new_v4(),
        "chair.png",
        "image/png",
        fixtures::create_test_png(10, 10),
    );
    let response = app.client().post("/api/upload").multipart(form).await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn upload_with_garbage_token_is_unauthorized() {
    let app = setup_test_app().await;

    let form = upload_form(
        "productId",
        Uuid::new_v4(),
        "chair.png",
        "image/png",
        fixtures::create_test_png(10, 10),
    );
    let response = app
        .client()
        .post("/api/upload")
        .add_header("Authorization", "Bearer not-a-jwt")
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn upload_with_expired_token_is_unauthorized() {
    let app = setup_test_app().await;
    let user = Uuid::new_v4();

    let form = upload_form(
        "productId",
        Uuid::new_v4(),
        "chair.png",
        "image/png",
        fixtures::create_test_png(10, 10),
    );
    let response = app
        .client()
        .post("/api/upload")
        .add_header(
            "Authorization",
            format!("Bearer {}", expired_session_token(user)),
        )
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn upload_without_file_is_rejected() {
    let app = setup_test_app().await;
    let user = Uuid::new_v4();

    let form = axum_test::multipart::MultipartForm::new()
        .add_text("productId", Uuid::new_v4().to_string());
    let response = app
        .client()
        .post("/api/upload")
        .add_header("Authorization", bearer(user))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No file provided");
}

#[tokio::test]
async fn upload_without_product_id_is_rejected() {
    let app = setup_test_app().await;
    let user = Uuid::new_v4();

    let part = axum_test::multipart::Part::bytes(bytes::Bytes::from(fixtures::create_test_png(
        10, 10,
    )))
    .file_name("chair.png")
    .mime_type("image/png");
    let form = axum_test::multipart::MultipartForm::new().add_part("file", part);
    let response = app
        .client()
        .post("/api/upload")
        .add_header("Authorization", bearer(user))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No product ID provided");
}

#[tokio::test]
async fn owner_field_name_is_camel_case() {
    let app = setup_test_app().await;
    let user = Uuid::new_v4();

    // The dashboard sends `productId`; a snake_case field is an unknown
    // field, so the request is missing its owner id.
    let form = upload_form(
        "product_id",
        Uuid::new_v4(),
        "chair.png",
        "image/png",
        fixtures::create_test_png(10, 10),
    );
    let response = app
        .client()
        .post("/api/upload")
        .add_header("Authorization", bearer(user))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No product ID provided");
}

#[tokio::test]
async fn upload_with_malformed_product_id_is_rejected() {
    let app = setup_test_app().await;
    let user = Uuid::new_v4();

    let part = axum_test::multipart::Part::bytes(bytes::Bytes::from(fixtures::create_test_png(
        10, 10,
    )))
    .file_name("chair.png")
    .mime_type("image/png");
    let form = axum_test::multipart::MultipartForm::new()
        .add_part("file", part)
        .add_text("productId", "not-a-uuid");
    let response = app
        .client()
        .post("/api/upload")
        .add_header("Authorization", bearer(user))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid product ID");
}

#[tokio::test]
async fn upload_of_undecodable_file_is_rejected() {
    let app = setup_test_app().await;
    let user = Uuid::new_v4();

    let form = upload_form(
        "productId",
        Uuid::new_v4(),
        "chair.png",
        "image/png",
        b"definitely not pixels".to_vec(),
    );
    let response = app
        .client()
        .post("/api/upload")
        .add_header("Authorization", bearer(user))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "File is not a processable image");
}

#[tokio::test]
async fn product_upload_stores_three_renditions() {
    let app = setup_test_app().await;
    let user = Uuid::new_v4();
    let product_id = Uuid::new_v4();

    let form = upload_form(
        "productId",
        product_id,
        "My Photo!.PNG",
        "image/png",
        fixtures::create_test_png(1000, 500),
    );
    let response = app
        .client()
        .post("/api/upload")
        .add_header("Authorization", bearer(user))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);

    let thumbnail = body["urls"]["thumbnail"].as_str().unwrap();
    let medium = body["urls"]["medium"].as_str().unwrap();
    let original = body["urls"]["original"].as_str().unwrap();

    assert!(thumbnail.ends_with(&format!(
        "/product-images/{}/my-photo--thumbnail.jpg",
        product_id
    )));
    assert!(medium.ends_with(&format!(
        "/product-images/{}/my-photo--medium.jpg",
        product_id
    )));
    assert!(original.ends_with(&format!(
        "/product-images/{}/my-photo--original.jpg",
        product_id
    )));

    // Every URL parses back to a key that holds a JPEG with the expected size.
    for (url, expected) in [
        (thumbnail, (300, 300)),
        (medium, (800, 400)),
        (original, (1000, 500)),
    ] {
        let key = parse_object_url(url, Bucket::ProductImages).unwrap();
        let data = app
            .storage
            .download(Bucket::ProductImages, &key)
            .await
            .unwrap();
        assert_eq!(fixtures::jpeg_dimensions(&data), expected);
    }
}

#[tokio::test]
async fn product_reupload_same_filename_yields_same_urls() {
    let app = setup_test_app().await;
    let user = Uuid::new_v4();
    let product_id = Uuid::new_v4();

    let mut urls = Vec::new();
    for _ in 0..2 {
        let form = upload_form(
            "productId",
            product_id,
            "oak-table.png",
            "image/png",
            fixtures::create_test_png(600, 600),
        );
        let response = app
            .client()
            .post("/api/upload")
            .add_header("Authorization", bearer(user))
            .multipart(form)
            .await;
        assert_eq!(response.status_code(), 200);
        let body: serde_json::Value = response.json();
        urls.push(body["urls"].clone());
    }

    assert_eq!(urls[0], urls[1]);
}

#[tokio::test]
async fn avatar_upload_for_other_user_is_forbidden() {
    let app = setup_test_app().await;
    let session_user = Uuid::new_v4();
    let other_user = Uuid::new_v4();

    let form = upload_form(
        "userId",
        other_user,
        "me.png",
        "image/png",
        fixtures::create_test_png(400, 400),
    );
    let response = app
        .client()
        .post("/api/upload-avatar")
        .add_header("Authorization", bearer(session_user))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 403);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Forbidden");
}

#[tokio::test]
async fn avatar_upload_for_self_stores_thumbnail() {
    let app = setup_test_app().await;
    let user = Uuid::new_v4();

    let form = upload_form(
        "userId",
        user,
        "me.png",
        "image/png",
        fixtures::create_test_png(400, 400),
    );
    let response = app
        .client()
        .post("/api/upload-avatar")
        .add_header("Authorization", bearer(user))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);

    let url = body["url"].as_str().unwrap();
    assert!(url.ends_with(&format!("/avatars/{}/me-thumbnail.jpg", user)));

    let key = parse_object_url(url, Bucket::Avatars).unwrap();
    let data = app.storage.download(Bucket::Avatars, &key).await.unwrap();
    assert_eq!(fixtures::jpeg_dimensions(&data), (300, 300));
}

#[tokio::test]
async fn brand_logo_upload_stores_thumbnail() {
    let app = setup_test_app().await;
    let user = Uuid::new_v4();
    let brand_id = Uuid::new_v4();

    let form = upload_form(
        "brandId",
        brand_id,
        "Logo v2.svg.png",
        "image/png",
        fixtures::create_test_png(512, 512),
    );
    let response = app
        .client()
        .post("/api/upload-brand")
        .add_header("Authorization", bearer(user))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();

    // Only the final extension is stripped; earlier dots become dashes.
    let url = body["url"].as_str().unwrap();
    assert!(url.ends_with(&format!(
        "/brand-logos/{}/logo-v2-svg-thumbnail.jpg",
        brand_id
    )));
}

#[tokio::test]
async fn room_upload_stores_original_without_upscaling() {
    let app = setup_test_app().await;
    let user = Uuid::new_v4();
    let room_id = Uuid::new_v4();

    let form = upload_form(
        "roomId",
        room_id,
        "living-room.png",
        "image/png",
        fixtures::create_test_png(120, 80),
    );
    let response = app
        .client()
        .post("/api/upload-room")
        .add_header("Authorization", bearer(user))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();

    let url = body["url"].as_str().unwrap();
    assert!(url.ends_with(&format!(
        "/room-images/{}/living-room-original.jpg",
        room_id
    )));

    // Small sources keep their dimensions.
    let key = parse_object_url(url, Bucket::RoomImages).unwrap();
    let data = app
        .storage
        .download(Bucket::RoomImages, &key)
        .await
        .unwrap();
    assert_eq!(fixtures::jpeg_dimensions(&data), (120, 80));
}
