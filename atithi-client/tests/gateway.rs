//! Gateway integration tests against a local mock server

use atithi_client::{CacheTag, ClientConfig, ClientError, Gateway};
use serde_json::json;
use shared::models::{GuestCreate, RoomTypeChange};
use shared::{ApiResponse, ListQuery, PaginatedResponse};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn envelope(data: serde_json::Value) -> ApiResponse<serde_json::Value> {
    ApiResponse::ok(data)
}

async fn gateway(server: &MockServer) -> Gateway {
    ClientConfig::new(server.uri()).build_gateway()
}

#[tokio::test]
async fn query_unwraps_envelope_and_caches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/properties/1/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "rooms": [
                { "id": 5, "property_id": 1, "name": "201", "floor_number": 2,
                  "room_type_id": null, "is_active": true }
            ]
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let gw = gateway(&server).await;
    let rooms = gw.rooms(1).await.unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, 5);
    assert_eq!(rooms[0].room_type_id, None);

    // Second call is served from the cache; the mock's expect(1) verifies it.
    let again = gw.rooms(1).await.unwrap();
    assert_eq!(again, rooms);
}

#[tokio::test]
async fn mutation_invalidates_tag_so_query_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/properties/1/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({ "rooms": [] }))))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/properties/1/rooms/bulk-update"))
        .and(body_json(json!([{ "id": 5, "room_type_id": 9 }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(null))))
        .expect(1)
        .mount(&server)
        .await;

    let gw = gateway(&server).await;
    gw.rooms(1).await.unwrap();

    gw.bulk_update_rooms(
        1,
        &[RoomTypeChange {
            id: 5,
            room_type_id: 9,
        }],
    )
    .await
    .unwrap();

    // Rooms tag was invalidated, so this hits the server again.
    gw.rooms(1).await.unwrap();
}

#[tokio::test]
async fn failed_mutation_keeps_cache_intact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/properties/1/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({ "rooms": [] }))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/properties/1/rooms/bulk-update"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let gw = gateway(&server).await;
    gw.rooms(1).await.unwrap();

    let err = gw
        .bulk_update_rooms(
            1,
            &[RoomTypeChange {
                id: 5,
                room_type_id: 9,
            }],
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Server(_)));

    // Cached entry survives the failure; expect(1) on the GET verifies it.
    gw.rooms(1).await.unwrap();
    assert_eq!(gw.cache().len(), 1);
}

#[tokio::test]
async fn login_installs_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "username": "manager", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "token": "tok-123",
            "user": { "id": 1, "username": "manager", "role": "admin" }
        }))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(
            { "id": 1, "username": "manager", "role": "admin" }
        ))))
        .expect(1)
        .mount(&server)
        .await;

    let gw = gateway(&server).await;
    assert!(!gw.is_authenticated());

    let user = gw.login("manager", "pw").await.unwrap();
    assert_eq!(user.username, "manager");
    assert!(gw.is_authenticated());
    assert_eq!(gw.current_user().unwrap().id, 1);

    let me = gw.me().await.unwrap();
    assert_eq!(me.role, "admin");
}

#[tokio::test]
async fn login_error_envelope_does_not_install_session() {
    let server = MockServer::start().await;
    // A failed login can come back 200 with an error code, and the server
    // may still attach a data payload to it.
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ApiResponse {
            code: "E1001".to_string(),
            message: "bad credentials".to_string(),
            data: Some(json!({
                "token": "tok-stale",
                "user": { "id": 1, "username": "manager", "role": "admin" }
            })),
        }))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ApiResponse::<serde_json::Value>::error("E1002", "no session")),
        )
        .mount(&server)
        .await;

    let gw = gateway(&server).await;

    let err = gw.login("manager", "wrong").await.unwrap_err();
    assert!(matches!(err, ClientError::Server(msg) if msg.contains("bad credentials")));
    assert!(!gw.is_authenticated());
    assert!(gw.current_user().is_none());

    let err = gw.me().await.unwrap_err();
    assert!(matches!(err, ClientError::Server(msg) if msg.contains("no session")));
}

#[tokio::test]
async fn unauthorized_clears_session_and_records_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "token": "expired",
            "user": { "id": 1, "username": "manager", "role": "admin" }
        }))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/vendors"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let gw = gateway(&server).await;
    gw.login("manager", "pw").await.unwrap();
    assert!(gw.is_authenticated());

    let err = gw.vendors(&ListQuery::all()).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(!gw.is_authenticated());
    assert_eq!(gw.take_redirect().as_deref(), Some("/api/vendors"));
    assert!(gw.take_redirect().is_none());
}

#[tokio::test]
async fn list_query_serializes_to_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/guests"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "20"))
        .and(query_param("search", "sharma"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ApiResponse::ok(
            PaginatedResponse::<serde_json::Value>::new(vec![], 2, 20, 0),
        )))
        .mount(&server)
        .await;

    let gw = gateway(&server).await;
    let page = gw
        .guests(&ListQuery::all().paginate(2, 20).search("sharma"))
        .await
        .unwrap();
    assert_eq!(page.pagination.page, 2);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn status_codes_map_to_typed_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bookings/42"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such booking"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/guests"))
        .respond_with(ResponseTemplate::new(400).set_body_string("phone is required"))
        .mount(&server)
        .await;

    let gw = gateway(&server).await;

    let err = gw.booking(42).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(msg) if msg.contains("no such booking")));

    let payload = GuestCreate {
        name: "A Guest".to_string(),
        phone: String::new(),
        email: None,
        id_proof_type: None,
        id_proof_number: None,
        address: None,
    };
    let err = gw.create_guest(&payload).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn logout_clears_token_session_and_cache() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "token": "tok",
            "user": { "id": 1, "username": "manager", "role": "admin" }
        }))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/sidebar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "path": "/bookings", "label": "Bookings",
              "can_create": true, "can_read": true, "can_update": true, "can_delete": false }
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(null))))
        .mount(&server)
        .await;

    let gw = gateway(&server).await;
    gw.login("manager", "pw").await.unwrap();
    let links = gw.sidebar_links().await.unwrap();
    assert_eq!(links.len(), 1);
    assert!(gw.cache().get(CacheTag::Sidebar, "me").is_some());

    gw.logout().await.unwrap();
    assert!(!gw.is_authenticated());
    assert!(gw.cache().is_empty());
}
