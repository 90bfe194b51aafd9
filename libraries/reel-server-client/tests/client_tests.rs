//! Tests for the Reel backend client library.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real backend connection.

use reel_core::types::{AuthSession, MovieId, UserId};
use reel_server_client::{BackendConfig, ClientError, ReelServerClient};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReelServerClient {
    ReelServerClient::new(BackendConfig::new(server.uri())).expect("valid url")
}

// =============================================================================
// Backend Config Tests
// =============================================================================

mod backend_config {
    use super::*;

    #[test]
    fn test_new_with_url() {
        let config = BackendConfig::new("https://example.com");
        assert_eq!(config.url, "https://example.com");
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_with_token() {
        let config = BackendConfig::with_token("https://example.com", "token_123");
        assert_eq!(config.access_token.as_deref(), Some("token_123"));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = ReelServerClient::new(BackendConfig::new("example.com"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }
}

// =============================================================================
// Authentication Tests
// =============================================================================

mod auth {
    use super::*;

    #[tokio::test]
    async fn test_sign_in_success_stores_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok-1",
                "user_id": "user-1",
                "email": "user@example.com",
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let session = client
            .sign_in_with_password("user@example.com", "secret1")
            .await
            .expect("sign-in should succeed");

        assert_eq!(session.user_id, UserId::new("user-1"));
        assert_eq!(session.email, "user@example.com");
        assert_eq!(session.access_token, "tok-1");
        assert!(client.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_sign_in_rejection_is_generic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({
                    "error": "auth_failed",
                    "message": "no such account",
                })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .sign_in_with_password("user@example.com", "wrong-pw")
            .await
            .expect_err("sign-in should fail");

        // The surfaced message never echoes the provider's account detail.
        match err {
            ClientError::AuthFailed(msg) => {
                assert_eq!(msg, "Incorrect email or password");
            }
            other => panic!("Expected AuthFailed, got {other:?}"),
        }
        assert!(!client.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_federated_sign_in_exchanges_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/federated/google"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok-g",
                "user_id": "user-9",
                "email": "g@example.com",
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let session = client
            .sign_in_with_federated_token("google-id-token")
            .await
            .expect("exchange should succeed");

        assert_eq!(session.user_id, UserId::new("user-9"));
        assert!(client.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_password_reset_reports_success_for_unknown_email() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/password-reset"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .request_password_reset("nobody@example.com")
            .await
            .expect("reset must report success for unregistered emails");
    }

    #[tokio::test]
    async fn test_password_reset_surfaces_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/password-reset"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .request_password_reset("user@example.com")
            .await
            .expect_err("500 should surface");
        assert!(matches!(err, ClientError::ServerError { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_clear_token_signs_out() {
        let server = MockServer::start().await;
        let client = ReelServerClient::new(BackendConfig::with_token(server.uri(), "tok"))
            .expect("valid url");

        assert!(client.is_authenticated().await);
        client.clear_token().await;
        assert!(!client.is_authenticated().await);
    }
}

// =============================================================================
// User Service Tests
// =============================================================================

mod users {
    use super::*;

    #[tokio::test]
    async fn test_get_user_data_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/user-1"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "user-1",
                "user_name": "Alice",
                "email": "alice@example.com",
                "age": 30,
                "badges": ["early-bird"],
                "lists": [{
                    "list_id": "list-1",
                    "name": "Favorites",
                    "list_type": "user",
                    "movies": [
                        { "movie_id": "m-1", "id": "e-1" },
                        { "movie_id": "m-2", "id": "e-2" }
                    ],
                    "members": [{ "user_id": "user-1", "is_author": true }],
                    "description": "",
                    "date_created": "2024-01-15T10:00:00Z"
                }],
            })))
            .mount(&server)
            .await;

        let client = ReelServerClient::new(BackendConfig::with_token(server.uri(), "tok"))
            .expect("valid url");

        let record = client
            .fetch_user_data(&UserId::new("user-1"))
            .await
            .expect("fetch should succeed");

        assert_eq!(record.user_name, "Alice");
        assert_eq!(record.lists.len(), 1);
        assert_eq!(record.lists[0].movies.len(), 2);
        assert_eq!(record.lists[0].movies[0].movie_id, MovieId::new("m-1"));
    }

    #[tokio::test]
    async fn test_get_user_data_requires_token() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let err = client
            .fetch_user_data(&UserId::new("user-1"))
            .await
            .expect_err("no token should fail locally");
        assert!(matches!(err, ClientError::AuthRequired));
        // No request must have reached the server.
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_user_data_maps_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ReelServerClient::new(BackendConfig::with_token(server.uri(), "tok"))
            .expect("valid url");

        let err = client
            .fetch_user_data(&UserId::new("ghost"))
            .await
            .expect_err("missing user should fail");
        assert!(matches!(err, ClientError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_profile_image() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/users/user-1/profile-image"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = ReelServerClient::new(BackendConfig::with_token(server.uri(), "tok"))
            .expect("valid url");

        client
            .set_profile_image(&UserId::new("user-1"), "/avatars/cat.png")
            .await
            .expect("update should succeed");
    }

    #[tokio::test]
    async fn test_check_email_exists_true_and_false() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/email-exists"))
            .and(query_param("email", "known@example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "exists": true })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/users/email-exists"))
            .and(query_param("email", "new@example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "exists": false })))
            .mount(&server)
            .await;

        let client = client_for(&server);

        assert!(client.email_exists("known@example.com").await.unwrap());
        assert!(!client.email_exists("new@example.com").await.unwrap());
    }
}

// =============================================================================
// Movie Service Tests
// =============================================================================

mod movies {
    use super::*;

    #[tokio::test]
    async fn test_fetch_movies_by_ids() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/movies"))
            .and(query_param("ids", "m-1,m-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "m-2", "title": "Heat", "poster_path": "/heat.jpg" },
                { "id": "m-1", "title": "Ronin", "poster_path": null },
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let movies = client
            .fetch_movies(&[MovieId::new("m-1"), MovieId::new("m-2")])
            .await
            .expect("batch should succeed");

        // Server order is not the request order; the client passes it through.
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Heat");
        assert_eq!(movies[1].title, "Ronin");
    }

    #[tokio::test]
    async fn test_empty_batch_skips_request() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let movies = client.fetch_movies(&[]).await.expect("empty batch is ok");
        assert!(movies.is_empty());
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}

// =============================================================================
// Journal Service Tests
// =============================================================================

mod journal {
    use super::*;

    #[tokio::test]
    async fn test_get_entries_uses_session_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/journal/entries"))
            .and(header("authorization", "Bearer session-tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": "e-1",
                    "movie_id": "m-1",
                    "watched_at": "2024-03-02T20:00:00Z",
                    "rating": 8.5
                },
                {
                    "id": "e-2",
                    "movie_id": "m-2",
                    "watched_at": "2024-03-15T21:30:00Z",
                    "rating": null
                }
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let session = AuthSession::new(UserId::new("user-1"), "user@example.com", "session-tok");

        let entries = client
            .fetch_journal_entries(&session)
            .await
            .expect("fetch should succeed");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].rating, Some(8.5));
        assert_eq!(entries[1].rating, None);
    }

    #[tokio::test]
    async fn test_expired_session_maps_to_auth_required() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/journal/entries"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let session = AuthSession::new(UserId::new("user-1"), "user@example.com", "stale-tok");

        let err = client
            .fetch_journal_entries(&session)
            .await
            .expect_err("401 should surface");
        assert!(matches!(err, ClientError::AuthRequired));
    }
}
