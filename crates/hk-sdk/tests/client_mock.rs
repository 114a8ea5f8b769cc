//! Housekeeping client tests against a mock HTTP server.

use hk_core::{
    mint_token, resolve_endpoint, Claims, HousekeepingContext, HousekeepingSettings, Settings,
    Signer,
};
use hk_sdk::{HousekeepingClient, NewRealm, SdkError};
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

struct FixedSigner;

impl Signer for FixedSigner {
    fn sign(&self, _claims: &Claims) -> hk_core::Result<String> {
        Ok("test.jwt.token".to_string())
    }
}

fn context(base: &str) -> HousekeepingContext {
    let settings = Settings {
        url: Some(base.to_string()),
        housekeeping: HousekeepingSettings::default(),
    };
    let endpoint = resolve_endpoint(&settings).unwrap();
    let token = mint_token(&FixedSigner, Claims::issued_at(1_700_000_000)).unwrap();
    HousekeepingContext::new(endpoint, token)
}

#[tokio::test]
async fn test_list_realms_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/housekeeping/v1/realms"))
        .and(header("Authorization", "Bearer test.jwt.token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": ["test", "production"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HousekeepingClient::new(&context(&mock_server.uri()));
    let realms = client.list_realms().await.unwrap();

    assert_eq!(realms, vec!["test".to_string(), "production".to_string()]);
}

#[tokio::test]
async fn test_get_realm_decodes_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/housekeeping/v1/realms/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "realm_name": "test",
                "jwt_public_key_pem": "-----BEGIN PUBLIC KEY-----\n...",
                "replication_class": "SimpleStrategy",
                "replication_factor": 1
            }
        })))
        .mount(&mock_server)
        .await;

    let client = HousekeepingClient::new(&context(&mock_server.uri()));
    let realm = client.get_realm("test").await.unwrap();

    assert_eq!(realm.realm_name, "test");
    assert_eq!(realm.replication_factor, Some(1));
    assert_eq!(realm.replication_class.as_deref(), Some("SimpleStrategy"));
    assert!(realm.datacenter_replication_factors.is_none());
}

#[tokio::test]
async fn test_create_realm_posts_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/housekeeping/v1/realms"))
        .and(body_json(json!({
            "data": {
                "realm_name": "newrealm",
                "jwt_public_key_pem": "PEM"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "realm_name": "newrealm",
                "jwt_public_key_pem": "PEM"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HousekeepingClient::new(&context(&mock_server.uri()));
    client
        .create_realm(&NewRealm {
            realm_name: "newrealm".to_string(),
            jwt_public_key_pem: "PEM".to_string(),
            replication_factor: None,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_api_error_surfaces_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/housekeeping/v1/realms"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid JWT"))
        .mount(&mock_server)
        .await;

    let client = HousekeepingClient::new(&context(&mock_server.uri()));
    let err = client.list_realms().await.unwrap_err();

    match err {
        SdkError::Api { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid JWT");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_undecodable_response_is_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/housekeeping/v1/realms"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = HousekeepingClient::new(&context(&mock_server.uri()));
    let err = client.list_realms().await.unwrap_err();

    assert!(matches!(err, SdkError::Http(_)));
}

#[tokio::test]
async fn test_realm_name_is_a_single_path_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/housekeeping/v1/realms/a%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "realm_name": "a/b", "jwt_public_key_pem": "PEM" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HousekeepingClient::new(&context(&mock_server.uri()));
    let realm = client.get_realm("a/b").await.unwrap();

    assert_eq!(realm.realm_name, "a/b");
}

#[tokio::test]
async fn test_realm_name_cannot_climb_out_of_realms() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/housekeeping/v1/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "realm_name": "admin", "jwt_public_key_pem": "PEM" }
        })))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/housekeeping/v1/realms/..%2Fadmin"))
        .respond_with(ResponseTemplate::new(404).set_body_string("realm not found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HousekeepingClient::new(&context(&mock_server.uri()));
    let err = client.get_realm("../admin").await.unwrap_err();

    assert!(matches!(err, SdkError::Api { status: 404, .. }));
}

#[tokio::test]
async fn test_dot_realm_names_are_rejected_without_a_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = HousekeepingClient::new(&context(&mock_server.uri()));
    for name in ["", ".", ".."] {
        let err = client.get_realm(name).await.unwrap_err();
        assert!(matches!(err, SdkError::InvalidRealmName(_)), "{name:?}: {err:?}");
    }
}
