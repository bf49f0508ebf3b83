// Integration tests for `ProductsClient` using wiremock.
#![allow(clippy::unwrap_used)]

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use catalogo_api::{CreateProductBody, Error, ProductsClient, UpdateProductBody};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ProductsClient) {
    let server = MockServer::start().await;
    let base = Url::parse(&format!("{}/api/products", server.uri())).unwrap();
    let client = ProductsClient::with_client(reqwest::Client::new(), base);
    (server, client)
}

fn product_json(id: &str, sku: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "name": "Foo",
        "description": "Bar",
        "active": true,
        "price": 9.99,
        "SKU": sku
    })
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_products_sends_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("page", "2"))
        .and(query_param("itemsPerPage", "5"))
        .and(query_param("active", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 11,
            "list": [product_json("p1", "A1"), product_json("p2", "A2")],
            "nextPage": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client.list_products(2, 5, true).await.unwrap();

    assert_eq!(page.total_count, 11);
    assert_eq!(page.list.len(), 2);
    assert_eq!(page.list[0].id, "p1");
    assert_eq!(page.list[1].sku, "A2");
    assert_eq!(page.next_page, Some(3));
}

#[tokio::test]
async fn test_get_product() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json("p1", "A1")))
        .mount(&server)
        .await;

    let product = client.get_product("p1").await.unwrap();
    assert_eq!(product.id, "p1");
    assert_eq!(product.name, "Foo");
}

#[tokio::test]
async fn test_get_product_encodes_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products/a%20b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json("a b", "A1")))
        .mount(&server)
        .await;

    let product = client.get_product("a b").await.unwrap();
    assert_eq!(product.id, "a b");
}

#[tokio::test]
async fn test_slash_in_id_stays_one_segment() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/products/abc%2F..%2F..%2Fadmin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json("abc/../../admin", "A1")))
        .expect(1)
        .mount(&server)
        .await;

    let product = client.delete_product("abc/../../admin").await.unwrap();
    assert_eq!(product.id, "abc/../../admin");
}

#[tokio::test]
async fn test_dot_segment_id_is_rejected() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.get_product("..").await.unwrap_err();
    assert!(matches!(err, Error::InvalidPathSegment(ref s) if s == ".."));
}

#[tokio::test]
async fn test_create_product_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/products"))
        .and(body_json(json!({
            "name": "Foo",
            "description": "Bar",
            "active": true,
            "price": 9.99,
            "SKU": "A1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(product_json("new", "A1")))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_product(&CreateProductBody {
            name: "Foo".into(),
            description: "Bar".into(),
            active: true,
            price: 9.99,
            sku: "A1".into(),
        })
        .await
        .unwrap();

    assert_eq!(created.id, "new");
}

#[tokio::test]
async fn test_update_product_stringifies_active() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/products/p1"))
        .and(body_json(json!({
            "name": "Foo",
            "description": "Bar",
            "active": "false",
            "price": 3.5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json("p1", "A1")))
        .expect(1)
        .mount(&server)
        .await;

    let body = UpdateProductBody::new("Foo".into(), "Bar".into(), false, 3.5);
    client.update_product("p1", &body).await.unwrap();
}

#[tokio::test]
async fn test_delete_product() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/products/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json("p1", "A1")))
        .expect(1)
        .mount(&server)
        .await;

    let deleted = client.delete_product("p1").await.unwrap();
    assert_eq!(deleted.sku, "A1");
}

#[tokio::test]
async fn test_set_base_url_applies_to_next_request() {
    let (first, client) = setup().await;
    let second = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/products/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json("p1", "A1")))
        .expect(1)
        .mount(&second)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&first)
        .await;

    let new_base = Url::parse(&format!("{}/v2/products/", second.uri())).unwrap();
    client.set_base_url(new_base.clone());
    assert_eq!(client.base_url(), new_base);

    client.get_product("p1").await.unwrap();
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_not_found_maps_to_http_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Product not found"
        })))
        .mount(&server)
        .await;

    let err = client.get_product("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
    match err {
        Error::Http { message, .. } => assert_eq!(message, "Product not found"),
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_with_plain_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client.list_products(0, 5, false).await.unwrap_err();
    assert!(!err.is_network());
    match err {
        Error::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.get_product("p1").await.unwrap_err();
    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "not json"),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let server = MockServer::start().await;
    let base = Url::parse(&format!("{}/api/products", server.uri())).unwrap();
    drop(server);

    let client = ProductsClient::with_client(reqwest::Client::new(), base);
    let err = client.list_products(0, 5, false).await.unwrap_err();

    assert!(err.is_network(), "expected network error, got: {err:?}");
    assert_eq!(err.status(), None);
}
