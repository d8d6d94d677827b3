mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::json;
use tower::util::ServiceExt;

use common::{
    AUTHORIZED_PARTY, FOREIGN_PRIVATE_KEY_PEM, ISSUER, MockGenerator, PRIVATE_KEY_PEM, app,
    body_json, now, post_json, sign_with, valid_claims,
};

async fn assert_rejected(request: Request<Body>) {
    let ai = MockGenerator::replying("Yes");

    let response = app(Some(ai.clone())).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({"error": "Unauthorized"}));
    assert_eq!(ai.calls(), 0);
}

#[tokio::test]
async fn missing_credential_is_rejected() {
    assert_rejected(post_json("/api/game/guess", None, r#"{"guess":"a dog"}"#)).await;
    assert_rejected(post_json("/api/game/start", None, "")).await;
}

#[tokio::test]
async fn non_bearer_scheme_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/game/guess")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::from(r#"{"guess":"a dog"}"#))
        .unwrap();

    assert_rejected(request).await;
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    assert_rejected(post_json(
        "/api/game/guess",
        Some("not.a.jwt"),
        r#"{"guess":"a dog"}"#,
    ))
    .await;
}

#[tokio::test]
async fn token_signed_by_unknown_key_is_rejected() {
    let token = sign_with(FOREIGN_PRIVATE_KEY_PEM, &valid_claims());

    assert_rejected(post_json(
        "/api/game/guess",
        Some(&token),
        r#"{"guess":"a dog"}"#,
    ))
    .await;
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let token = sign_with(
        PRIVATE_KEY_PEM,
        &json!({
            "sub": "user_2dogLover",
            "iss": ISSUER,
            "azp": AUTHORIZED_PARTY,
            "exp": now() - 3600,
        }),
    );

    assert_rejected(post_json(
        "/api/game/guess",
        Some(&token),
        r#"{"guess":"a dog"}"#,
    ))
    .await;
}

#[tokio::test]
async fn token_from_other_issuer_is_rejected() {
    let token = sign_with(
        PRIVATE_KEY_PEM,
        &json!({
            "sub": "user_2dogLover",
            "iss": "https://clerk.someone-else.test",
            "exp": now() + 600,
        }),
    );

    assert_rejected(post_json("/api/game/start", Some(&token), "")).await;
}

#[tokio::test]
async fn token_for_unlisted_party_is_rejected() {
    let token = sign_with(
        PRIVATE_KEY_PEM,
        &json!({
            "sub": "user_2dogLover",
            "iss": ISSUER,
            "azp": "https://phishing.test",
            "exp": now() + 600,
        }),
    );

    assert_rejected(post_json("/api/game/start", Some(&token), "")).await;
}

#[tokio::test]
async fn valid_token_reaches_handler() {
    let token = sign_with(PRIVATE_KEY_PEM, &valid_claims());

    let response = app(None)
        .oneshot(post_json("/api/game/start", Some(&token), ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
