use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::system::auth::middleware::require_auth;
use crate::system::middleware::request_logger::request_logger;
use crate::{handlers, system};

/// Application routes
pub fn configure_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // AUTH (PUBLIC)
        // ========================================
        .route("/api/login", post(system::handlers::auth::login))
        // ========================================
        // ARTICLES (BEARER)
        // ========================================
        .route(
            "/api/articles",
            get(handlers::a001_article::list_all)
                .post(handlers::a001_article::create)
                .layer(middleware::from_fn(require_auth)),
        )
        .route(
            "/api/articles/:id",
            put(handlers::a001_article::update)
                .delete(handlers::a001_article::delete)
                .layer(middleware::from_fn(require_auth)),
        )
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::shared::config::AuthConfig;
    use crate::system::auth::jwt;

    fn bearer() -> String {
        // Tests share one process; only the first call installs the settings
        let _ = jwt::initialize(AuthConfig {
            jwt_secret: "routes-test-secret".to_string(),
            token_lifetime_hours: 1,
        });
        format!("Bearer {}", jwt::generate_access_token("foo").unwrap())
    }

    async fn send(
        method: &str,
        uri: &str,
        authorization: Option<&str>,
        body: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = configure_routes().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_missing_token_is_401_json() {
        let (status, body) = send("GET", "/api/articles", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Ouch: token required");
    }

    #[tokio::test]
    async fn test_bad_token_is_malformed() {
        bearer();
        let (status, body) = send("GET", "/api/articles", Some("Bearer nonsense"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Ouch: jwt malformed");
    }

    #[tokio::test]
    async fn test_login_then_list() {
        bearer();
        let (status, body) = send(
            "POST",
            "/api/login",
            None,
            Some(r#"{"username":"foo","password":"12345678"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Welcome back, foo!");

        let token = format!("Bearer {}", body["token"].as_str().unwrap());
        let (status, body) = send("GET", "/api/articles", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Here are your articles, foo!");
        assert!(body["articles"].is_array());
    }

    #[tokio::test]
    async fn test_create_is_201() {
        let token = bearer();
        let (status, body) = send(
            "POST",
            "/api/articles",
            Some(&token),
            Some(r#"{"title":"A","text":"B","topic":"JavaScript"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["article"]["title"], "A");
        assert_eq!(body["message"], "Well done, foo. Great article!");
    }

    #[tokio::test]
    async fn test_undecodable_draft_is_422_json() {
        let token = bearer();
        for draft in [
            r#"{"title":"A","text":"B","topic":"Rust"}"#,
            r#"{"title":"A","text":"B"}"#,
            "not json",
        ] {
            let (status, body) = send("POST", "/api/articles", Some(&token), Some(draft)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", draft);
            assert_eq!(body["message"], "Ouch: title, text and topic are required");
        }

        let (status, body) = send(
            "PUT",
            "/api/articles/1",
            Some(&token),
            Some(r#"{"title":"only a title"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "Ouch: title, text and topic are required");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_400_json() {
        let token = bearer();
        let (status, body) = send("DELETE", "/api/articles/abc", Some(&token), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Ouch: article id must be a positive integer");
    }

    #[tokio::test]
    async fn test_missing_article_is_404() {
        let token = bearer();
        let (status, body) = send(
            "PUT",
            "/api/articles/999999",
            Some(&token),
            Some(r#"{"title":"A","text":"B","topic":"Node"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Ouch: article 999999 does not exist");

        let (status, body) = send("DELETE", "/api/articles/999999", Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Ouch: article 999999 does not exist");
    }
}
