use std::net::SocketAddr;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, header},
};
use folio::{AppState, router};
use folio_notification::MockMailer;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const CONTACT_ADDRESS: &str = "owner@example.com";
pub const SEND_EMAIL_PATH: &str = "/sendEmail";

pub fn test_router(mailer: &MockMailer) -> Router {
    router(
        AppState::new(mailer.clone(), CONTACT_ADDRESS),
        SEND_EMAIL_PATH,
    )
}

pub async fn post_json(router: &Router, body: impl Into<String>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(SEND_EMAIL_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();

    router.clone().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn request(router: &Router, method: Method) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(SEND_EMAIL_PATH)
        .body(Body::empty())
        .unwrap();

    router.clone().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Serve the router on an ephemeral local port.
#[allow(dead_code)]
pub async fn spawn_app(mailer: &MockMailer) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = test_router(mailer);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Accept SMTP connections on an ephemeral port without ever answering.
#[allow(dead_code)]
pub async fn spawn_silent_smtp_server() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    port
}
