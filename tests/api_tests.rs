// tests/api_tests.rs

use content_guard::{config::Config, routes, state::AppState};
use serde_json::{Value, json};

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app() -> String {
    let config = Config {
        rust_log: "error".to_string(),
        log_dir: None,
        max_body_bytes: 16 * 1024,
        ..Config::default()
    };

    let state = AppState { config };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn post_json(address: &str, path: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}{}", address, path))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request");
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.expect("Response is not JSON");
    (status, body)
}

#[tokio::test]
async fn health_check_works() {
    // Arrange
    let address = spawn_app().await;

    // Act
    let response = reqwest::get(format!("{}/api/health", address))
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["environment"], "development");
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let address = spawn_app().await;

    let response = reqwest::get(format!("{}/random_path_that_does_not_exist", address))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Route not found");
}

#[tokio::test]
async fn sanitize_html_strips_scripts_and_keeps_formatting() {
    let address = spawn_app().await;

    let (status, body) = post_json(
        &address,
        "/api/sanitize/html",
        json!({"content": "<p>Hi <em>all</em></p><script>alert(1)</script><img src=x onerror=\"x()\">"}),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["content"], "<p>Hi <em>all</em></p><img src=\"x\">");
}

#[tokio::test]
async fn sanitize_html_treats_non_strings_as_empty() {
    let address = spawn_app().await;

    for content in [json!(null), json!(42), json!({"html": "<p>x</p>"})] {
        let (status, body) =
            post_json(&address, "/api/sanitize/html", json!({ "content": content })).await;
        assert_eq!(status, 200);
        assert_eq!(body["content"], "");
    }

    let (status, body) = post_json(&address, "/api/sanitize/html", json!({})).await;
    assert_eq!(status, 200);
    assert_eq!(body["content"], "");
}

#[tokio::test]
async fn sanitize_text_and_form_endpoints() {
    let address = spawn_app().await;

    let (status, body) =
        post_json(&address, "/api/sanitize/text", json!({"content": "<b>hi</b>"})).await;
    assert_eq!(status, 200);
    assert_eq!(body["content"], "bhi/b");

    let (status, body) = post_json(
        &address,
        "/api/sanitize/form",
        json!({"content": " <script>Hello</script> "}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["content"], "Hello/");
}

#[tokio::test]
async fn url_endpoints() {
    let address = spawn_app().await;

    let (_, body) = post_json(
        &address,
        "/api/sanitize/url",
        json!({"url": "https://example.com/path"}),
    )
    .await;
    assert_eq!(body["url"], "https://example.com/path");

    let (_, body) =
        post_json(&address, "/api/sanitize/url", json!({"url": "javascript:evil()"})).await;
    assert_eq!(body["url"], "");

    let (_, body) =
        post_json(&address, "/api/validate/url", json!({"url": "https://example.com"})).await;
    assert_eq!(body["valid"], true);

    let (_, body) = post_json(
        &address,
        "/api/validate/url",
        json!({"url": "data:text/html;base64,PHNjcmlwdD4="}),
    )
    .await;
    assert_eq!(body["valid"], false);

    let (status, body) = post_json(&address, "/api/validate/url", json!({"url": 7})).await;
    assert_eq!(status, 200);
    assert_eq!(body["valid"], false);
    assert_eq!(body["url"], Value::Null);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let address = spawn_app().await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/sanitize/html", address))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let address = spawn_app().await;

    let (status, body) = post_json(
        &address,
        "/api/sanitize/html",
        json!({"content": "a".repeat(32 * 1024)}),
    )
    .await;

    assert_eq!(status, 413);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn submit_post_cleans_every_field() {
    let address = spawn_app().await;

    let (status, body) = post_json(
        &address,
        "/api/content/posts",
        json!({
            "title": "<i>Camp</i> recap",
            "body": "<h2>Day 1</h2><p onclick=\"x()\">Fun</p><script>steal()</script>",
            "cover_image": "javascript:alert(1)",
            "author": "Youth Team"
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["modified"], true);
    assert_eq!(body["post"]["title"], "iCamp/i recap");
    assert_eq!(body["post"]["body"], "<h2>Day 1</h2><p>Fun</p>");
    assert_eq!(body["post"]["cover_image"], Value::Null);
    assert_eq!(body["post"]["author"], "Youth Team");
}

#[tokio::test]
async fn submit_post_fails_validation() {
    let address = spawn_app().await;

    // Act: Send an empty title
    let (status, _) = post_json(
        &address,
        "/api/content/posts",
        json!({"title": "", "body": "<p>x</p>", "author": "a"}),
    )
    .await;

    // Assert
    assert_eq!(status, 400);
}

#[tokio::test]
async fn submit_aspiration_uses_form_rules() {
    let address = spawn_app().await;

    let (status, body) = post_json(
        &address,
        "/api/content/aspirations",
        json!({
            "name": "Dana",
            "message": "I want to write movie scripts",
            "email": "dana@example.org"
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["aspiration"]["message"], "I want to write movie s");
    assert_eq!(body["aspiration"]["email"], "dana@example.org");
    assert_eq!(body["modified"], true);

    let (status, _) = post_json(
        &address,
        "/api/content/aspirations",
        json!({"name": "Dana", "message": "hi", "email": "nope"}),
    )
    .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn submit_gallery_item_requires_http_image() {
    let address = spawn_app().await;

    let (status, body) = post_json(
        &address,
        "/api/content/gallery",
        json!({"caption": "Choir night", "image_url": "https://img.example.org/choir.jpg"}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["item"]["image_url"], "https://img.example.org/choir.jpg");
    assert_eq!(body["modified"], false);

    let (status, body) = post_json(
        &address,
        "/api/content/gallery",
        json!({"caption": "Choir night", "image_url": "data:image/png;base64,AAAA"}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "image_url must be an http(s) URL");
}
