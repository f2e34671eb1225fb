#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use canteen_server::api::build_router;
use canteen_server::db::DbService;
use canteen_server::{Config, ServerState};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

pub fn test_config(seed_demo_catalog: bool) -> Config {
    Config {
        seed_demo_catalog,
        ..Config::default()
    }
}

/// Router over a fresh in-memory store with the admin seeded
pub async fn app() -> Router {
    app_with(test_config(false)).await
}

pub async fn app_with(config: Config) -> Router {
    let db = DbService::in_memory().await.unwrap();
    let state = ServerState::with_db(&config, db).await.unwrap();
    build_router(state)
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn with_cookie(mut req: Request<Body>, cookie: &str) -> Request<Body> {
    req.headers_mut()
        .insert(header::COOKIE, cookie.parse().unwrap());
    req
}

pub async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    resp.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

pub async fn body_text(resp: Response<Body>) -> String {
    String::from_utf8(body_bytes(resp).await).unwrap()
}

/// Log in with the seeded credential and return the `name=value` cookie pair
pub async fn login(app: &Router) -> String {
    let resp = send(
        app,
        json_request(
            "POST",
            "/admin/login",
            &serde_json::json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD}),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    cookie.split(';').next().unwrap().to_string()
}

/// Place an order and return its id
pub async fn place_order(app: &Router, body: Value) -> i64 {
    let resp = send(app, json_request("POST", "/place_order", &body)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["success"], true);
    json["order_id"].as_i64().unwrap()
}

pub fn tea_order(customer_name: &str) -> Value {
    serde_json::json!({
        "customer_name": customer_name,
        "items": [{"id": 5, "name": "Tea", "price": 10.0, "quantity": 2, "total": 20.0}],
        "subtotal": 20.0,
        "tax": 1.0,
        "total": 21.0
    })
}
