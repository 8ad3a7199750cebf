//! Integration tests for the product CRUD routes.

mod helpers;

use std::sync::Arc;

use http::StatusCode;
use serde_json::json;

use helpers::{FailingProductStore, ReadOnlyProductStore, TestApp};

#[tokio::test]
async fn test_create_without_fields_reports_every_failure() {
    let app = TestApp::new();

    let response = app.request("POST", "/api/products", Some(json!({}))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.errors();
    assert_eq!(errors.len(), 4);

    let messages: Vec<&str> = errors.iter().filter_map(|e| e["msg"].as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Product name is required",
            "Price must be a number",
            "Not a valid price",
            "Product price is required",
        ]
    );
    assert_eq!(errors[0]["type"], "field");
    assert_eq!(errors[0]["path"], "name");
    assert_eq!(errors[0]["location"], "body");
    assert!(errors[0].get("value").is_none());
}

#[tokio::test]
async fn test_create_with_empty_body_matches_empty_object() {
    let app = TestApp::new();

    let response = app.request("POST", "/api/products", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.errors().len(), 4);
}

#[tokio::test]
async fn test_create_with_non_positive_price() {
    let app = TestApp::new();

    for price in [json!(0), json!(-10)] {
        let response = app
            .request(
                "POST",
                "/api/products",
                Some(json!({ "name": "Monitor Curvo", "price": price })),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        let errors = response.errors();
        assert_eq!(errors.len(), 1, "price {price}");
        assert_eq!(errors[0]["msg"], "Not a valid price");
        assert_eq!(errors[0]["value"], price);
    }
}

#[tokio::test]
async fn test_create_with_non_numeric_price() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({ "name": "Monitor Curvo", "price": "Hola" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["msg"], "Price must be a number");
    assert_eq!(errors[1]["msg"], "Not a valid price");
}

#[tokio::test]
async fn test_create_with_price_overflowing_to_infinity() {
    let app = TestApp::new();
    let price = format!("1{}", "0".repeat(400));

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({ "name": "Huge", "price": price })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["msg"], "Price must be a number");
    assert_eq!(errors[1]["msg"], "Not a valid price");
    assert!(app.products.find_all().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_create_product() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({ "name": "iPad 14 Pro 2024", "price": 799.99 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body.get("errors").is_none());

    let data = &response.body["data"];
    assert!(data["id"].is_i64());
    assert_eq!(data["name"], "iPad 14 Pro 2024");
    assert_eq!(data["price"], 799.99);
    assert_eq!(data["availability"], true);
    assert!(data["createdAt"].is_string());
    assert!(data["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_accepts_numeric_string_and_explicit_availability() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({ "name": "Mouse", "price": "19.90", "availability": false })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["price"], 19.9);
    assert_eq!(response.body["data"]["availability"], false);
}

#[tokio::test]
async fn test_create_with_invalid_availability_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({ "name": "Mouse", "price": 20, "availability": "yes" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error = response.body["error"].as_str().expect("error message");
    assert!(error.starts_with("Invalid request body"), "{error}");
    assert!(app.products.find_all().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request_raw("POST", "/api/products", "{\"name\": \"Mouse\", ")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({ "error": "Malformed JSON body" }));
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let app = TestApp::new();
    let name = "x".repeat(200 * 1024);

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({ "name": name, "price": 10 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.products.find_all().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_get_product() {
    let app = TestApp::new();
    let created = app.create_product("Teclado", 45.5).await;
    let path = format!("/api/products/{}", created["id"]);

    let first = app.request("GET", &path, None).await;
    let second = app.request("GET", &path, None).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["data"], created);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn test_get_missing_product() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/products/2000", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "error": "Product not found" }));
}

#[tokio::test]
async fn test_get_with_invalid_id() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/products/not-valid-url", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["msg"], "Not a valid ID");
    assert_eq!(errors[0]["path"], "id");
    assert_eq!(errors[0]["location"], "params");
    assert_eq!(errors[0]["value"], "not-valid-url");
}

#[tokio::test]
async fn test_get_with_out_of_range_id_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/products/99999999999999999999", None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_products_newest_first_without_timestamps() {
    let app = TestApp::new();
    let first = app.create_product("Silla", 120.0).await;
    let second = app.create_product("Escritorio", 250.0).await;

    let response = app.request("GET", "/api/products", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], second["id"]);
    assert_eq!(data[1]["id"], first["id"]);
    for product in data {
        assert!(product.get("createdAt").is_none());
        assert!(product.get("updatedAt").is_none());
        assert!(product.get("availability").is_some());
    }
}

#[tokio::test]
async fn test_list_empty_store() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/products", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "data": [] }));
}

#[tokio::test]
async fn test_update_product() {
    let app = TestApp::new();
    let created = app.create_product("Monitor", 300.0).await;
    let path = format!("/api/products/{}", created["id"]);

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({ "name": "Monitor Curvo", "price": 350, "availability": false })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["id"], created["id"]);
    assert_eq!(data["name"], "Monitor Curvo");
    assert_eq!(data["price"], 350.0);
    assert_eq!(data["availability"], false);
    assert_eq!(data["createdAt"], created["createdAt"]);

    let fetched = app.request("GET", &path, None).await;
    assert_eq!(fetched.body["data"], *data);
}

#[tokio::test]
async fn test_update_with_empty_body() {
    let app = TestApp::new();
    let created = app.create_product("Monitor", 300.0).await;
    let path = format!("/api/products/{}", created["id"]);

    let response = app.request("PUT", &path, Some(json!({}))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.errors();
    assert_eq!(errors.len(), 5);
    assert_eq!(errors[4]["msg"], "Product availability is required");
}

#[tokio::test]
async fn test_update_with_invalid_id_and_empty_body() {
    let app = TestApp::new();

    let response = app
        .request("PUT", "/api/products/not-valid-url", Some(json!({})))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.errors();
    assert_eq!(errors.len(), 6);
    assert_eq!(errors[0]["msg"], "Not a valid ID");
    assert_eq!(errors[0]["location"], "params");
}

#[tokio::test]
async fn test_update_with_invalid_availability() {
    let app = TestApp::new();
    let created = app.create_product("Monitor", 300.0).await;
    let path = format!("/api/products/{}", created["id"]);

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({ "name": "Monitor", "price": 300, "availability": "yes" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["path"], "availability");
}

#[tokio::test]
async fn test_update_missing_product() {
    let app = TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/products/2000",
            Some(json!({ "name": "Monitor", "price": 300, "availability": true })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "error": "Product not found" }));
}

#[tokio::test]
async fn test_toggle_availability() {
    let app = TestApp::new();
    let created = app.create_product("Audífonos", 80.0).await;
    assert_eq!(created["availability"], true);
    let path = format!("/api/products/{}", created["id"]);

    let response = app
        .request("PATCH", &path, Some(json!({ "availability": true })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["availability"], false);
    assert_eq!(response.body["data"]["name"], "Audífonos");

    let response = app.request("PATCH", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["availability"], true);
}

#[tokio::test]
async fn test_toggle_missing_or_invalid_id() {
    let app = TestApp::new();

    for path in ["/api/products/2000", "/api/products/not-valid-url"] {
        let response = app.request("PATCH", path, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(response.body, json!({ "error": "Product not found" }));
    }
}

#[tokio::test]
async fn test_delete_product() {
    let app = TestApp::new();
    let created = app.create_product("Bocina", 30.0).await;
    let path = format!("/api/products/{}", created["id"]);

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "data": "Product deleted" }));

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "error": "Product not found" }));

    let response = app.request("GET", &path, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_with_invalid_id() {
    let app = TestApp::new();

    let response = app
        .request("DELETE", "/api/products/not-valid-url", None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.errors().len(), 1);
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let app = TestApp::with_store(Arc::new(FailingProductStore));
    let expected = json!({ "error": "Internal server error" });

    let response = app.request("GET", "/api/products", None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, expected);

    let response = app.request("GET", "/api/products/1", None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, expected);

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({ "name": "Mouse", "price": 20 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, expected);
}

#[tokio::test]
async fn test_store_failure_on_lookup_for_writes() {
    let app = TestApp::with_store(Arc::new(FailingProductStore));
    let expected = json!({ "error": "Internal server error" });

    let response = app
        .request(
            "PUT",
            "/api/products/1",
            Some(json!({ "name": "Monitor", "price": 300, "availability": true })),
        )
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, expected);

    for method in ["PATCH", "DELETE"] {
        let response = app.request(method, "/api/products/1", None).await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR, "{method}");
        assert_eq!(response.body, expected);
    }
}

#[tokio::test]
async fn test_store_failure_after_successful_lookup() {
    let app = TestApp::with_store(Arc::new(ReadOnlyProductStore::default()));
    let created = app.create_product("Lámpara", 35.0).await;
    let path = format!("/api/products/{}", created["id"]);
    let expected = json!({ "error": "Internal server error" });

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({ "name": "Lámpara LED", "price": 40, "availability": false })),
        )
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, expected);

    for method in ["PATCH", "DELETE"] {
        let response = app.request(method, &path, None).await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR, "{method}");
        assert_eq!(response.body, expected);
    }

    let fetched = app.request("GET", &path, None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"], created);
}

#[tokio::test]
async fn test_validation_runs_before_store_access() {
    let app = TestApp::with_store(Arc::new(FailingProductStore));

    let response = app.request("POST", "/api/products", Some(json!({}))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.errors().len(), 4);
}
