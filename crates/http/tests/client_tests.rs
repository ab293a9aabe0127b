//! Integration tests for the Cristal HTTP client
//!
//! The refresh-and-retry pipeline is exercised against a mock backend: the
//! bearer attachment, the single transparent retry after a 401, the forced
//! logout when the refresh itself fails, and the shared in-flight refresh
//! for concurrent 401s.

use cristal_core::store::{keys, CookieAttributes, MemoryTokenStore, TokenStore};
use cristal_core::Session;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn empty_store() -> Arc<MemoryTokenStore> {
    Arc::new(MemoryTokenStore::new())
}

fn store_with(access: &str, refresh: Option<&str>) -> Arc<MemoryTokenStore> {
    let store = empty_store();
    let attrs = CookieAttributes::strict(false);
    store.set(keys::ACCESS_TOKEN, access, &attrs).unwrap();
    if let Some(refresh) = refresh {
        store.set(keys::REFRESH_TOKEN, refresh, &attrs).unwrap();
    }
    store
}

fn client(
    base_url: &str,
    store: Arc<MemoryTokenStore>,
) -> cristal_http::CristalClient {
    cristal_http::CristalClient::builder()
        .base_url(base_url)
        .token_store(store)
        .cookie_attributes(CookieAttributes::strict(false))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_client_builder() {
    let client = cristal_http::CristalClient::builder()
        .base_url("http://localhost:8000/")
        .token_store(empty_store())
        .build();

    assert!(client.is_ok());
    assert_eq!(client.unwrap().base_url(), "http://localhost:8000");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = cristal_http::CristalClient::builder()
        .token_store(empty_store())
        .build();
    assert!(matches!(
        result,
        Err(cristal_http::ClientError::Configuration(_))
    ));
}

#[tokio::test]
async fn test_client_builder_requires_token_store() {
    let result = cristal_http::CristalClient::builder()
        .base_url("http://localhost:8000")
        .build();
    assert!(matches!(
        result,
        Err(cristal_http::ClientError::Configuration(_))
    ));
}

#[tokio::test]
async fn test_bearer_header_attached_when_token_present() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/"))
        .and(header("authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), store_with("a1", None));
    let services = client.list_services().await.unwrap();
    assert!(services.is_empty());
}

#[tokio::test]
async fn test_request_without_token_is_sent_unauthenticated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), empty_store());
    client.list_services().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_login_scenario_populates_store_and_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token/"))
        .and(body_json(json!({"username": "admin", "password": "password"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "a1",
            "refresh": "r1",
            "user": {"name": "Admin"}
        })))
        .mount(&mock_server)
        .await;

    let public = cristal_http::PublicCristalClient::new(mock_server.uri()).unwrap();
    let response = public.login("admin", "password").await.unwrap();

    let store = empty_store();
    let mut session = Session::new(store.clone(), CookieAttributes::strict(false));
    session
        .login(&response.access, &response.refresh, response.user)
        .unwrap();

    assert_eq!(store.get(keys::ACCESS_TOKEN), Some("a1".to_string()));
    assert_eq!(store.get(keys::REFRESH_TOKEN), Some("r1".to_string()));
    assert!(session.is_authenticated());
    assert_eq!(session.user().and_then(|u| u.name.as_deref()), Some("Admin"));
}

#[tokio::test]
async fn test_invalid_credentials_leave_session_untouched() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .mount(&mock_server)
        .await;

    let public = cristal_http::PublicCristalClient::new(mock_server.uri()).unwrap();
    let result = public.login("admin", "wrong").await;

    match result {
        Err(err) => assert!(err.is_invalid_credentials()),
        Ok(_) => panic!("login should have failed"),
    }
}

#[tokio::test]
async fn test_401_then_successful_refresh_replays_once() {
    let mock_server = MockServer::start().await;

    // Replay with the rotated token succeeds; anything else is rejected.
    Mock::given(method("GET"))
        .and(path("/employees/"))
        .and(header("authorization", "Bearer a2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "username": "jdoe",
            "email": "jdoe@example.com",
            "first_name": "Jane",
            "last_name": "Doe",
            "position": "Technician"
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/employees/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .and(body_json(json!({"refresh": "r1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "a2"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = store_with("expired", Some("r1"));
    let client = client(&mock_server.uri(), store.clone());

    let employees = client.list_employees().await.unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].username, "jdoe");

    // The rotated access token is persisted; the refresh token is untouched.
    assert_eq!(store.get(keys::ACCESS_TOKEN), Some("a2".to_string()));
    assert_eq!(store.get(keys::REFRESH_TOKEN), Some("r1".to_string()));
}

#[tokio::test]
async fn test_failed_refresh_clears_store_and_fires_hook() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("token is blacklisted"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = store_with("expired", Some("r1"));
    let expired = Arc::new(AtomicBool::new(false));
    let expired_flag = expired.clone();
    let client = cristal_http::CristalClient::builder()
        .base_url(mock_server.uri())
        .token_store(store.clone())
        .on_session_expired(Arc::new(move || {
            expired_flag.store(true, Ordering::SeqCst);
        }))
        .build()
        .unwrap();

    let result = client.list_orders().await;
    assert!(matches!(
        result,
        Err(cristal_http::ClientError::SessionExpired(_))
    ));
    assert_eq!(store.get(keys::ACCESS_TOKEN), None);
    assert_eq!(store.get(keys::REFRESH_TOKEN), None);
    assert_eq!(store.get(keys::USER_PROFILE), None);
    assert!(expired.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_retried_401_propagates_without_second_refresh() {
    let mock_server = MockServer::start().await;

    // The backend rejects even the refreshed token.
    Mock::given(method("GET"))
        .and(path("/orders/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("still unauthorized"))
        .expect(2)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "a2"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = store_with("expired", Some("r1"));
    let client = client(&mock_server.uri(), store.clone());

    let result = client.list_orders().await;
    assert!(matches!(
        result,
        Err(cristal_http::ClientError::AuthenticationFailed(_))
    ));
    // One refresh happened; the replayed 401 did not trigger another.
    assert_eq!(store.get(keys::ACCESS_TOKEN), Some("a2".to_string()));
    assert_eq!(store.get(keys::REFRESH_TOKEN), Some("r1".to_string()));
}

#[tokio::test]
async fn test_missing_refresh_token_skips_refresh_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "a2"})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let store = store_with("expired", None);
    let client = client(&mock_server.uri(), store.clone());

    let result = client.list_orders().await;
    assert!(matches!(
        result,
        Err(cristal_http::ClientError::SessionExpired(_))
    ));
    assert_eq!(store.get(keys::ACCESS_TOKEN), None);
}

#[tokio::test]
async fn test_concurrent_401s_share_a_single_refresh() {
    let mock_server = MockServer::start().await;

    for resource in ["/orders/", "/services/"] {
        Mock::given(method("GET"))
            .and(path(resource))
            .and(header("authorization", "Bearer a2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path(resource))
            .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
            .mount(&mock_server)
            .await;
    }
    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .and(body_json(json!({"refresh": "r1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "a2"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = store_with("expired", Some("r1"));
    let client = client(&mock_server.uri(), store.clone());

    let (orders, services) = futures::join!(client.list_orders(), client.list_services());
    assert!(orders.unwrap().is_empty());
    assert!(services.unwrap().is_empty());
    assert_eq!(store.get(keys::ACCESS_TOKEN), Some("a2".to_string()));
}

#[tokio::test]
async fn test_error_handling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/ghost/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), store_with("a1", None));
    let result = client.get_customer("ghost").await;
    assert!(matches!(result, Err(cristal_http::ClientError::NotFound(_))));
}
