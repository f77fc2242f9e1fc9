//! Catalog HTTP tests against the in-memory store.

mod common;

use common::start_server;
use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};

fn item_body() -> Value {
    json!({
        "name": "Celeste",
        "price": "$19.99",
        "description": "A precision platformer about climbing a mountain",
        "rating": "4.8",
        "reviews": ["Tight controls", "Beautiful music"]
    })
}

fn item_form() -> Form {
    Form::new()
        .text("name", "Celeste")
        .text("price", "$19.99")
        .text("description", "A precision platformer about climbing a mountain")
        .text("rating", "4.8")
        .text("reviews", "Tight controls")
        .text("reviews", "Beautiful music")
}

#[tokio::test]
async fn list_returns_seeded_catalog() {
    let app = start_server().await;

    let resp = app.client.get(app.url("/catalog")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let items: Value = resp.json().await.unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 9);
    assert_eq!(items[0]["_id"], 1);
    assert_eq!(items[0]["name"], "HellDivers 2");
    assert_eq!(items[0]["price"], "$49.99");
}

#[tokio::test]
async fn get_by_id_returns_item_or_null() {
    let app = start_server().await;

    let item: Value = app.client.get(app.url("/catalog/4")).send().await.unwrap().json().await.unwrap();
    assert_eq!(item["name"], "NVIDIA RTX-4090 GPU");
    assert_eq!(item["img"], "gpu.png");

    for id in ["99", "not-an-id"] {
        let resp = app.client.get(app.url(&format!("/catalog/{id}"))).send().await.unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert!(body.is_null(), "expected null for id {id}");
    }
}

#[tokio::test]
async fn create_from_json_uses_placeholder_image() {
    let app = start_server().await;

    let resp = app.client.post(app.url("/catalog")).json(&item_body()).send().await.unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["_id"], 10);
    assert_eq!(body["data"]["img"], "placeholder.png");
    assert_eq!(body["data"]["reviews"], json!(["Tight controls", "Beautiful music"]));

    let fetched: Value = app.client.get(app.url("/catalog/10")).send().await.unwrap().json().await.unwrap();
    assert_eq!(fetched, body["data"]);
}

#[tokio::test]
async fn create_with_upload_stores_file() {
    let app = start_server().await;

    let form = item_form().part(
        "img",
        Part::bytes(b"fake png bytes".to_vec()).file_name("celeste.png"),
    );
    let resp = app.client.post(app.url("/catalog")).multipart(form).send().await.unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["img"], "celeste.png");
    assert_eq!(body["data"]["reviews"], json!(["Tight controls", "Beautiful music"]));

    let written = std::fs::read(app.images_dir.join("celeste.png")).unwrap();
    assert_eq!(written, b"fake png bytes");

    let served = app.client.get(app.url("/images/celeste.png")).send().await.unwrap();
    assert_eq!(served.status(), 200);
    assert_eq!(served.bytes().await.unwrap().as_ref(), b"fake png bytes");
}

#[tokio::test]
async fn create_rejects_missing_fields() {
    let app = start_server().await;

    let resp = app
        .client
        .post(app.url("/catalog"))
        .json(&json!({ "name": "Celeste", "price": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "success": false, "error": "\"price\" is not allowed to be empty" })
    );

    let items: Value = app.client.get(app.url("/catalog")).send().await.unwrap().json().await.unwrap();
    assert_eq!(items.as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn create_rejects_non_array_reviews() {
    let app = start_server().await;

    let mut body = item_body();
    body["reviews"] = json!("just one review");
    let resp = app.client.post(app.url("/catalog")).json(&body).send().await.unwrap();
    assert_eq!(resp.status(), 400);
    let error: Value = resp.json().await.unwrap();
    assert_eq!(error["error"], "\"reviews\" must be an array");

    body["reviews"] = json!(["Tight controls", 5]);
    let resp = app.client.post(app.url("/catalog")).json(&body).send().await.unwrap();
    let error: Value = resp.json().await.unwrap();
    assert_eq!(error["error"], "\"reviews[1]\" must be a string");

    let form = item_form().text("reviews", "[not json");
    let resp = app.client.post(app.url("/catalog")).multipart(form).send().await.unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "\"reviews\" must be an array");
}

#[tokio::test]
async fn fetched_item_can_be_sent_back_but_other_keys_cannot() {
    let app = start_server().await;

    let mut item: Value = app.client.get(app.url("/catalog/2")).send().await.unwrap().json().await.unwrap();
    item["price"] = json!("$9.99");
    let resp = app.client.put(app.url("/catalog/2")).json(&item).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["price"], "$9.99");

    let mut body = item_body();
    body["stock"] = json!(3);
    let resp = app.client.post(app.url("/catalog")).json(&body).send().await.unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "\"stock\" is not allowed");
}

#[tokio::test]
async fn update_without_file_keeps_image() {
    let app = start_server().await;

    let resp = app.client.put(app.url("/catalog/2")).json(&item_body()).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["_id"], 2);
    assert_eq!(body["data"]["name"], "Celeste");
    assert_eq!(body["data"]["img"], "marvelrivals.png");

    let items: Value = app.client.get(app.url("/catalog")).send().await.unwrap().json().await.unwrap();
    assert_eq!(items[1]["name"], "Celeste");
}

#[tokio::test]
async fn update_with_file_replaces_image() {
    let app = start_server().await;

    let form = item_form().part("img", Part::bytes(b"new cover".to_vec()).file_name("rivals-s2.png"));
    let resp = app.client.put(app.url("/catalog/2")).multipart(form).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["img"], "rivals-s2.png");
    assert!(app.images_dir.join("rivals-s2.png").exists());
}

#[tokio::test]
async fn update_with_empty_file_part_keeps_image() {
    let app = start_server().await;

    let form = item_form().part("img", Part::bytes(Vec::new()).file_name(""));
    let resp = app.client.put(app.url("/catalog/3")).multipart(form).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["img"], "headset.webp");
}

#[tokio::test]
async fn update_unknown_item_is_not_found_before_validation() {
    let app = start_server().await;

    let resp = app
        .client
        .put(app.url("/catalog/77"))
        .json(&json!({ "name": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "success": false, "message": "Item not found." }));
}

#[tokio::test]
async fn update_with_invalid_body_is_bad_request() {
    let app = start_server().await;

    let resp = app
        .client
        .put(app.url("/catalog/1"))
        .json(&json!({ "name": "HellDivers 2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "\"price\" is required");

    let item: Value = app.client.get(app.url("/catalog/1")).send().await.unwrap().json().await.unwrap();
    assert_eq!(item["price"], "$49.99");
}

#[tokio::test]
async fn delete_removes_item_then_reports_not_found() {
    let app = start_server().await;

    let resp = app.client.delete(app.url("/catalog/9")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "success": true, "message": "Item deleted!" }));

    let items: Value = app.client.get(app.url("/catalog")).send().await.unwrap().json().await.unwrap();
    assert_eq!(items.as_array().unwrap().len(), 8);

    let resp = app.client.delete(app.url("/catalog/9")).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    let resp = app.client.delete(app.url("/catalog/garbage")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn legacy_popular_items_path() {
    let app = start_server().await;

    let items: Value = app
        .client
        .get(app.url("/api/popularItems"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(items.as_array().unwrap().len(), 9);

    let item: Value = app
        .client
        .get(app.url("/api/popularItems/7"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(item["name"], "Hallow Knight Silksong");
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let app = start_server().await;

    let resp = app.client.get(app.url("/nope")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn health_reports_backend() {
    let app = start_server().await;

    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "memory");
    assert_eq!(body["catalog_items"], 9);
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let app = start_server().await;

    let resp = app
        .client
        .get(app.url("/catalog"))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
