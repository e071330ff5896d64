//! Integration tests for the inventory item resource.
//!
//! These tests drive the full stack (config -> `RestClient` -> service)
//! against a local mock server standing in for the Admin API.

use serde_json::json;
use shopify_inventory::{
    AccessToken, ClientConfig, HostUrl, HttpError, InventoryItem, InventoryItemFindParams,
    InventoryItemListParams, PageCursor, PaginationError, ResourceError, RestClient, ShopDomain,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ITEMS_PATH: &str = "/admin/api/2025-10/inventory_items.json";

fn create_client(mock_server: &MockServer) -> RestClient {
    let config = ClientConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new("test-access-token").unwrap())
        .api_host(HostUrl::new(mock_server.uri()).unwrap())
        .build()
        .unwrap();

    RestClient::new(&config).unwrap()
}

fn items_body() -> serde_json::Value {
    json!({
        "inventory_items": [
            {
                "id": 808950810,
                "sku": "IPOD2008PINK",
                "cost": "25.00",
                "tracked": true,
                "created_at": "2024-01-15T10:30:00-05:00",
                "admin_graphql_api_id": "gid://shopify/InventoryItem/808950810"
            },
            {
                "id": 39072856,
                "sku": "IPOD2008GREEN",
                "tracked": false
            }
        ]
    })
}

// === List ===

#[tokio::test]
async fn test_list_with_pagination_returns_items_and_next_cursor() {
    let mock_server = MockServer::start().await;
    let link = format!(r#"<{}{ITEMS_PATH}?page_info=abc&limit=50>; rel="next""#, mock_server.uri());

    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .and(header("X-Shopify-Access-Token", "test-access-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(items_body())
                .insert_header("Link", link.as_str()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let (items, pagination) = client
        .inventory_items()
        .list_with_pagination(None)
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 808_950_810);
    assert_eq!(items[0].cost, Some("25.00".parse().unwrap()));
    assert_eq!(items[1].tracked, Some(false));

    assert_eq!(
        pagination.next,
        Some(PageCursor {
            page_info: "abc".to_string(),
            limit: Some(50),
        })
    );
    assert!(pagination.previous.is_none());
}

#[tokio::test]
async fn test_list_without_link_header_has_no_cursors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let (items, pagination) = client
        .inventory_items()
        .list_with_pagination(None)
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert!(!pagination.has_next_page());
    assert!(!pagination.has_previous_page());
}

#[tokio::test]
async fn test_list_encodes_params_into_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .and(query_param("ids", "808950810,39072856"))
        .and(query_param("limit", "2"))
        .and(query_param("fields", "id,sku"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let params = InventoryItemListParams {
        ids: Some(vec![808_950_810, 39_072_856]),
        limit: Some(2),
        fields: Some(vec!["id".to_string(), "sku".to_string()]),
        ..Default::default()
    };

    let items = client.inventory_items().list(Some(params)).await.unwrap();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_following_next_cursor_requests_that_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .and(query_param("page_info", "abc"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_items": [{"id": 3, "sku": "PAGE-2"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let cursor = PageCursor {
        page_info: "abc".to_string(),
        limit: Some(50),
    };

    let items = client
        .inventory_items()
        .list(Some((&cursor).into()))
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].sku.as_deref(), Some("PAGE-2"));
}

#[tokio::test]
async fn test_list_with_bogus_relation_fails_without_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(items_body())
                .insert_header("Link", r#"<https://x/y>; rel="bogus""#),
        )
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let service = client.inventory_items();

    let result = service.list_with_pagination(None).await;
    assert!(matches!(
        result,
        Err(ResourceError::Pagination(PaginationError::UnknownRelation { .. }))
    ));

    let error = service.list(None).await.unwrap_err();
    assert!(matches!(
        error,
        ResourceError::Context {
            context: "list",
            ..
        }
    ));
    assert!(matches!(
        error.root_cause(),
        ResourceError::Pagination(PaginationError::UnknownRelation { .. })
    ));
}

#[tokio::test]
async fn test_list_with_missing_envelope_key_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let items = client.inventory_items().list(None).await.unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_list_with_wrong_envelope_shape_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"inventory_items": "nope"})),
        )
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let error = client
        .inventory_items()
        .list_with_pagination(None)
        .await
        .unwrap_err();

    assert!(matches!(error, ResourceError::Decode { .. }));
}

#[tokio::test]
async fn test_list_with_html_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html>maintenance</html>")
                .insert_header("Content-Type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let error = client
        .inventory_items()
        .list_with_pagination(None)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ResourceError::Decode {
            resource: "InventoryItem",
            ..
        }
    ));
}

#[tokio::test]
async fn test_list_joins_repeated_link_header_lines() {
    let mock_server = MockServer::start().await;
    let previous = format!(
        r#"<{}{ITEMS_PATH}?page_info=prev-token&limit=2>; rel="previous""#,
        mock_server.uri()
    );
    let next = format!(
        r#"<{}{ITEMS_PATH}?page_info=next-token&limit=2>; rel="next""#,
        mock_server.uri()
    );

    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(items_body())
                .append_header("Link", previous.as_str())
                .append_header("Link", next.as_str()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let (items, pagination) = client
        .inventory_items()
        .list_with_pagination(None)
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(
        pagination.previous,
        Some(PageCursor {
            page_info: "prev-token".to_string(),
            limit: Some(2),
        })
    );
    assert_eq!(
        pagination.next,
        Some(PageCursor {
            page_info: "next-token".to_string(),
            limit: Some(2),
        })
    );
}

#[tokio::test]
async fn test_list_server_error_is_wrapped_with_list_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"errors": "Internal Server Error"}))
                .insert_header("X-Request-Id", "req-500"),
        )
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let error = client.inventory_items().list(None).await.unwrap_err();

    assert!(error.to_string().starts_with("error in list: "));
    assert!(matches!(
        error.root_cause(),
        ResourceError::Http(HttpError::Response(response)) if response.code == 500
    ));
    assert_eq!(error.request_id(), Some("req-500"));
}

// === Get ===

#[tokio::test]
async fn test_get_returns_item() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/inventory_items/808950810.json"))
        .and(query_param("fields", "id,sku"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_item": {"id": 808950810, "sku": "IPOD2008PINK"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let params = InventoryItemFindParams {
        fields: Some(vec!["id".to_string(), "sku".to_string()]),
    };

    let item = client
        .inventory_items()
        .get(808_950_810, Some(params))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(item.id, 808_950_810);
    assert_eq!(item.sku.as_deref(), Some("IPOD2008PINK"));
    assert!(item.cost.is_none());
}

#[tokio::test]
async fn test_get_null_item_returns_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/inventory_items/0.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"inventory_item": null})))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let item = client.inventory_items().get(0, None).await.unwrap();

    assert!(item.is_none());
}

#[tokio::test]
async fn test_get_missing_item_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/inventory_items/999.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let error = client.inventory_items().get(999, None).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::NotFound { resource: "InventoryItem", ref id } if id == "999"
    ));
}

#[tokio::test]
async fn test_get_with_non_json_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/inventory_items/7.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let error = client.inventory_items().get(7, None).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::Decode {
            resource: "InventoryItem",
            ..
        }
    ));
}

// === Update ===

#[tokio::test]
async fn test_update_puts_wrapped_item_and_returns_server_version() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/admin/api/2025-10/inventory_items/42.json"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "inventory_item": {"id": 42, "sku": "NEW-SKU", "cost": "12.50", "tracked": true}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_item": {
                "id": 42,
                "sku": "NEW-SKU",
                "cost": "12.50",
                "tracked": true,
                "updated_at": "2025-10-01T12:00:00Z"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let item = InventoryItem {
        id: 42,
        sku: Some("NEW-SKU".to_string()),
        cost: Some("12.50".parse().unwrap()),
        tracked: Some(true),
        ..Default::default()
    };

    let saved = client
        .inventory_items()
        .update(&item)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(saved.id, 42);
    assert_eq!(saved.cost, item.cost);
    assert!(saved.updated_at.is_some());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_update_validation_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/admin/api/2025-10/inventory_items/42.json"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"errors": {"cost": ["must be greater than or equal to 0"]}}))
                .insert_header("X-Request-Id", "req-422"),
        )
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let item = InventoryItem {
        id: 42,
        cost: Some("-1".parse().unwrap()),
        ..Default::default()
    };

    let error = client.inventory_items().update(&item).await.unwrap_err();

    match error {
        ResourceError::ValidationFailed { errors, request_id } => {
            assert_eq!(
                errors.get("cost"),
                Some(&vec!["must be greater than or equal to 0".to_string()])
            );
            assert_eq!(request_id.as_deref(), Some("req-422"));
        }
        other => panic!("Expected ValidationFailed, got {other:?}"),
    }
}
