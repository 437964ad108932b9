use std::io::Cursor;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tokio::net::TcpListener;

use pixfit_configuration::AppConfig;
use pixfit_http_server::create_app_router;
use pixfit_setup::Application;

fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([40, 90, 160])))
        .write_to(&mut buffer, ImageFormat::Jpeg)
        .expect("test jpeg encodes");
    buffer.into_inner()
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([200, 30, 30])))
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("test png encodes");
    buffer.into_inner()
}

async fn spawn_upstream() -> String {
    let app = Router::new()
        .route(
            "/photo.jpg",
            get(|| async {
                ([(header::CONTENT_TYPE, "image/jpeg")], jpeg_bytes(800, 600)).into_response()
            }),
        )
        .route(
            "/square.png",
            get(|| async {
                ([(header::CONTENT_TYPE, "image/png")], png_bytes(300, 300)).into_response()
            }),
        )
        .route(
            "/page.html",
            get(|| async {
                ([(header::CONTENT_TYPE, "text/html")], "<html></html>").into_response()
            }),
        )
        .route(
            "/missing.jpg",
            get(|| async { StatusCode::NOT_FOUND.into_response() }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind upstream");
    let addr = listener.local_addr().expect("upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve upstream");
    });
    format!("http://{addr}")
}

async fn spawn_service() -> String {
    let app = Application::new(AppConfig::default())
        .await
        .expect("application wires up");
    let router = create_app_router(app.state);
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind service");
    let addr = listener.local_addr().expect("service addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve service");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn width_only_resize_scales_proportionally_and_keeps_the_format() {
    let upstream = spawn_upstream().await;
    let service = spawn_service().await;

    let response = reqwest::get(format!(
        "{service}/?image={upstream}/photo.jpg&width=400&height=0"
    ))
    .await
    .expect("request succeeds");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("image/jpeg")
    );

    let body = response.bytes().await.expect("body reads");
    let output = image::load_from_memory(&body).expect("output decodes");
    assert_eq!((output.width(), output.height()), (400, 300));
}

#[tokio::test]
async fn exact_crop_returns_the_requested_box() {
    let upstream = spawn_upstream().await;
    let service = spawn_service().await;

    let response = reqwest::get(format!(
        "{service}/?image={upstream}/square.png&width=100&height=100&mode=crop"
    ))
    .await
    .expect("request succeeds");

    assert_eq!(response.status(), 200);
    let body = response.bytes().await.expect("body reads");
    let output = image::load_from_memory(&body).expect("output decodes");
    assert_eq!((output.width(), output.height()), (100, 100));
}

#[tokio::test]
async fn exact_resize_forces_both_dimensions() {
    let upstream = spawn_upstream().await;
    let service = spawn_service().await;

    let response = reqwest::get(format!(
        "{service}/?image={upstream}/photo.jpg&width=200&height=200"
    ))
    .await
    .expect("request succeeds");

    assert_eq!(response.status(), 200);
    let body = response.bytes().await.expect("body reads");
    let output = image::load_from_memory(&body).expect("output decodes");
    assert_eq!((output.width(), output.height()), (200, 200));
}

#[tokio::test]
async fn non_image_source_yields_a_400_with_the_rejection_text() {
    let upstream = spawn_upstream().await;
    let service = spawn_service().await;

    let response = reqwest::get(format!(
        "{service}/?image={upstream}/page.html&width=100"
    ))
    .await
    .expect("request succeeds");

    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text().await.expect("body reads"),
        "URL is not image type."
    );
}

#[tokio::test]
async fn upstream_404_yields_a_400_with_the_rejection_text() {
    let upstream = spawn_upstream().await;
    let service = spawn_service().await;

    let response = reqwest::get(format!(
        "{service}/?image={upstream}/missing.jpg&width=100"
    ))
    .await
    .expect("request succeeds");

    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text().await.expect("body reads"),
        "Error retrieving image from URL."
    );
}

#[tokio::test]
async fn missing_image_parameter_yields_the_validation_text() {
    let service = spawn_service().await;

    let response = reqwest::get(format!("{service}/?width=100"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text().await.expect("body reads"),
        "Missing 'image' query parameter."
    );
}

#[tokio::test]
async fn identical_requests_return_identical_bytes() {
    let upstream = spawn_upstream().await;
    let service = spawn_service().await;
    let url = format!("{service}/?image={upstream}/square.png&width=150&height=0");

    let first = reqwest::get(&url)
        .await
        .expect("first request")
        .bytes()
        .await
        .expect("first body");
    let second = reqwest::get(&url)
        .await
        .expect("second request")
        .bytes()
        .await
        .expect("second body");

    assert_eq!(first, second);
}
