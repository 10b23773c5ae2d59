mod common;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use common::{Part, TAKEN_EMAIL, TestApp, body_json, json_request, multipart_request};
use serde_json::json;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn order_parts<'a>(items: &'a str, save_info: &'a str) -> Vec<Part<'a>> {
    vec![
        Part::Text("firstName", "Jane"),
        Part::Text("lastName", "Doe"),
        Part::Text("country", "ID"),
        Part::Text("address", "Jl. Merdeka 1"),
        Part::Text("city", "Bandung"),
        Part::Text("postalCode", "40111"),
        Part::Text("phone", "0812000000"),
        Part::Text("saveInfo", save_info),
        Part::Text("paymentMethod", "bank_transfer"),
        Part::Text("items", items),
    ]
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new();

    let response = app.send(get("/api/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "OK" }));
}

#[tokio::test]
async fn unknown_routes_get_uniform_not_found() {
    let app = TestApp::new();

    let response = app.send(get("/api/nothing-here")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "Not Found" }));
}

#[tokio::test]
async fn register_returns_created_user() {
    let app = TestApp::new();

    let response = app
        .send(json_request(
            "POST",
            "/api/auth/register",
            json!({ "email": "jane@example.com", "password": "secret123" }),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({ "id": 1, "email": "jane@example.com", "role": "customer" })
    );
}

#[tokio::test]
async fn register_accepts_url_encoded_bodies() {
    let app = TestApp::new();

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("email=form%40example.com&password=secret123"))
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["email"], "form@example.com");
}

#[tokio::test]
async fn register_accepts_short_password_and_padded_email() {
    let app = TestApp::new();

    let response = app
        .send(json_request(
            "POST",
            "/api/auth/register",
            json!({ "email": "  Jane@Example.com ", "password": "abc" }),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["email"], "jane@example.com");
}

#[tokio::test]
async fn register_conflict_and_validation_errors() {
    let app = TestApp::new();

    let response = app
        .send(json_request(
            "POST",
            "/api/auth/register",
            json!({ "email": TAKEN_EMAIL, "password": "secret123" }),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Email already in use" })
    );

    let response = app
        .send(json_request(
            "POST",
            "/api/auth/register",
            json!({ "email": "not-an-email", "password": "" }),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("email"), "{error}");
    assert!(error.contains("password"), "{error}");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = TestApp::new();

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn login_failure_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .send(json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": "jane@example.com", "password": "wrong" }),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Invalid credentials" })
    );
}

#[tokio::test]
async fn lists_products_with_camel_case_fields() {
    let app = TestApp::new();

    let response = app.send(get("/api/products")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{
            "id": 1,
            "name": "Linen shirt",
            "description": null,
            "price": "49.90",
            "stockQuantity": 3,
            "category": "shirts",
            "imageUrl": "/uploads/shirt.png"
        }])
    );
}

#[tokio::test]
async fn creates_product_from_multipart_form() {
    let app = TestApp::new();

    let request = multipart_request(
        "POST",
        "/api/products",
        &[
            Part::Text("name", "Wool coat"),
            Part::Text("price", "120.00"),
            Part::Text("stockQuantity", "4"),
            Part::Text("category", "coats"),
            Part::File {
                name: "image",
                file_name: "coat.png",
                bytes: b"png-bytes",
            },
        ],
    );

    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Wool coat");
    assert_eq!(body["price"], "120.00");
    assert_eq!(body["stockQuantity"], 4);
    assert_eq!(body["imageUrl"], "/uploads/new.png");

    let image = app.products.last_image.lock().unwrap().clone().unwrap();
    assert_eq!(image.file_name.as_deref(), Some("coat.png"));
    assert_eq!(&image.bytes[..], b"png-bytes");
}

#[tokio::test]
async fn product_form_with_bad_numbers_is_rejected() {
    let app = TestApp::new();

    let request = multipart_request(
        "POST",
        "/api/products",
        &[
            Part::Text("name", "Wool coat"),
            Part::Text("price", "cheap"),
            Part::Text("stockQuantity", "4"),
        ],
    );
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = multipart_request(
        "POST",
        "/api/products",
        &[
            Part::Text("name", "Wool coat"),
            Part::Text("price", "10"),
            Part::Text("stockQuantity", "-1"),
        ],
    );
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_of_missing_product_is_not_found() {
    let app = TestApp::new();

    let request = multipart_request(
        "PUT",
        "/api/products/99",
        &[
            Part::Text("name", "Ghost"),
            Part::Text("price", "1.00"),
            Part::Text("stockQuantity", "0"),
        ],
    );

    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Product not found" })
    );
}

#[tokio::test]
async fn delete_product_returns_no_content_or_not_found() {
    let app = TestApp::new();

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/products/1")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/products/2")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_a_bad_request() {
    let app = TestApp::new();

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/orders/abc")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "Invalid id" }));
}

#[tokio::test]
async fn creates_order_from_multipart_form() {
    let app = TestApp::new();

    let items = r#"[{"productId":1,"quantity":2,"price":"10.00"},{"id":2,"quantity":1,"price":5.5}]"#;
    let mut parts = order_parts(items, "true");
    parts.push(Part::File {
        name: "paymentPhoto",
        file_name: "receipt.jpg",
        bytes: b"jpeg",
    });

    let response = app.send(multipart_request("POST", "/api/orders", &parts)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "success": true, "orderId": 7 })
    );

    let request = app.orders.last_request.lock().unwrap().clone().unwrap();
    assert!(request.save_info);
    assert_eq!(request.postal_code, "40111");
    assert!(app.orders.last_photo.lock().unwrap().is_some());
}

#[tokio::test]
async fn order_without_photo_and_with_other_save_flag() {
    let app = TestApp::new();

    let items = r#"[{"productId":1,"quantity":1,"price":"3.00"}]"#;
    let mut parts = order_parts(items, "yes");
    parts.push(Part::File {
        name: "paymentPhoto",
        file_name: "",
        bytes: b"",
    });

    let response = app.send(multipart_request("POST", "/api/orders", &parts)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let request = app.orders.last_request.lock().unwrap().clone().unwrap();
    assert!(!request.save_info);
    assert!(app.orders.last_photo.lock().unwrap().is_none());
}

#[tokio::test]
async fn order_with_unparseable_items_is_rejected() {
    let app = TestApp::new();

    let parts = order_parts("[{not json", "true");
    let response = app.send(multipart_request("POST", "/api/orders", &parts)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Invalid items payload" })
    );
    assert!(app.orders.last_request.lock().unwrap().is_none());
}

#[tokio::test]
async fn status_update_validates_the_status() {
    let app = TestApp::new();

    let response = app
        .send(json_request(
            "PATCH",
            "/api/orders/1/status",
            json!({ "status": "shipped" }),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "id": 1, "status": "shipped" })
    );

    let response = app
        .send(json_request(
            "PATCH",
            "/api/orders/1/status",
            json!({ "status": "delivered" }),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "Invalid status" }));

    let response = app
        .send(json_request(
            "PATCH",
            "/api/orders/42/status",
            json!({ "status": "canceled" }),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_or_non_text_status_is_an_invalid_status() {
    let app = TestApp::new();

    for body in [json!({}), json!({ "status": 5 }), json!({ "status": null })] {
        let response = app
            .send(json_request("PATCH", "/api/orders/1/status", body.clone()))
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Invalid status" }),
            "{body}"
        );
    }
}

#[tokio::test]
async fn delete_order_returns_no_content_or_not_found() {
    let app = TestApp::new();

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/orders/1")
        .body(Body::empty())
        .unwrap();
    assert_eq!(app.send(request).await.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/orders/5")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "Order not found" }));
}

#[tokio::test]
async fn panics_become_internal_errors() {
    let app = TestApp::new();

    let response = app.send(get("/api/orders")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Internal server error" })
    );
}

#[tokio::test]
async fn serves_uploaded_files() {
    let app = TestApp::new();
    std::fs::write(app.upload_dir.path().join("hello.txt"), b"stored").unwrap();

    let response = app.send(get("/uploads/hello.txt")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"stored");

    let response = app.send(get("/uploads/missing.txt")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn exposes_metrics_and_openapi() {
    let app = TestApp::new();

    let response = app.send(get("/metrics")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("application/openmetrics-text"));

    let response = app.send(get("/api-docs/openapi.json")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["paths"]["/api/orders/{id}/status"]["patch"].is_object());
    assert!(doc["paths"]["/api/products"]["post"].is_object());
}

#[tokio::test]
async fn cors_is_restricted_to_the_frontend_when_configured() {
    let app = TestApp::with_frontend(Some("https://shop.example.com"));

    let request = Request::builder()
        .uri("/api/health")
        .header(header::ORIGIN, "https://shop.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://shop.example.com"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let app = TestApp::new();

    let request = Request::builder()
        .uri("/api/health")
        .header(header::ORIGIN, "https://elsewhere.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
