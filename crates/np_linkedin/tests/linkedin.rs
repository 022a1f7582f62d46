use np_core::{Config, Error, GeneratedPost};
use np_linkedin::LinkedInClient;
use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> LinkedInClient {
    let config = Config {
        linkedin_client_id: Some("client-1".to_string()),
        linkedin_client_secret: Some("secret-1".to_string()),
        linkedin_redirect_uri: Some("http://localhost:3001/auth/linkedin/callback".to_string()),
        linkedin_oauth_url: format!("{}/oauth/v2", server.uri()),
        linkedin_api_url: format!("{}/v2", server.uri()),
        ..Config::default()
    };
    LinkedInClient::from_config(Client::new(), &config)
}

#[tokio::test]
async fn test_exchange_code_posts_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/v2/accessToken"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=auth-code"))
        .and(body_string_contains("client_secret=secret-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "AQV-token",
            "expires_in": 5184000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client_for(&server).exchange_code("auth-code").await.unwrap();
    assert_eq!(token.secret(), "AQV-token");
}

#[tokio::test]
async fn test_exchange_rejection_is_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/v2/accessToken"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_request",
            "error_description": "Unable to retrieve access token: appid/redirect uri/code verifier does not match"
        })))
        .mount(&server)
        .await;

    match client_for(&server).exchange_code("stale").await {
        Err(Error::Authentication(failure)) => {
            assert_eq!(failure.payload.unwrap()["error"], "invalid_request");
        }
        other => panic!("expected authentication error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_publish_sends_ugc_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .and(header("authorization", "Bearer AQV-token"))
        .and(header("X-Restli-Protocol-Version", "2.0.0"))
        .and(body_partial_json(json!({
            "author": "urn:li:person:me",
            "lifecycleState": "PUBLISHED",
            "specificContent": {
                "com.linkedin.ugc.ShareContent": {
                    "shareCommentary": {"text": "Hello network"},
                    "shareMediaCategory": "NONE"
                }
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "urn:li:share:1"})))
        .expect(1)
        .mount(&server)
        .await;

    let post = GeneratedPost::new(Some("AQV-token".into()), Some("Hello network".into())).unwrap();
    client_for(&server).publish(&post).await.unwrap();
}

#[tokio::test]
async fn test_publish_rejection_surfaces_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "serviceErrorCode": 65600,
            "message": "Invalid access token",
            "status": 401
        })))
        .mount(&server)
        .await;

    let post = GeneratedPost::new(Some("expired".into()), Some("Hi".into())).unwrap();
    match client_for(&server).publish(&post).await {
        Err(Error::Publish(failure)) => {
            assert_eq!(failure.payload.unwrap()["message"], "Invalid access token");
        }
        other => panic!("expected publish error, got {:?}", other),
    }
}

fn unreachable_client() -> LinkedInClient {
    let config = Config {
        linkedin_client_id: Some("client-1".to_string()),
        linkedin_client_secret: Some("secret-1".to_string()),
        linkedin_redirect_uri: Some("http://localhost:3001/auth/linkedin/callback".to_string()),
        linkedin_oauth_url: "http://127.0.0.1:9/oauth/v2".to_string(),
        linkedin_api_url: "http://127.0.0.1:9/v2".to_string(),
        ..Config::default()
    };
    LinkedInClient::from_config(Client::new(), &config)
}

#[tokio::test]
async fn test_exchange_unreachable_host_is_authentication_error() {
    let result = unreachable_client().exchange_code("auth-code").await;
    assert!(matches!(result, Err(Error::Authentication(_))));
}

#[tokio::test]
async fn test_publish_unreachable_host_is_publish_error() {
    let post = GeneratedPost::new(Some("AQV-token".into()), Some("Hello".into())).unwrap();
    match unreachable_client().publish(&post).await {
        Err(Error::Publish(failure)) => {
            assert!(failure.payload.is_none());
            assert!(!failure.message.is_empty());
        }
        other => panic!("expected publish error, got {:?}", other),
    }
}
