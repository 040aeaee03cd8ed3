//! End-to-end HTTP tests running the full application against
//! in-memory repositories.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use tt_api::app::{create_app, AppState};
use tt_core::repositories::{MockTodoRepository, MockUserRepository};
use tt_core::services::{TokenConfig, TokenService};

const SECRET: &str = "integration-test-secret";

fn test_state() -> web::Data<AppState<MockUserRepository, MockTodoRepository>> {
    let token_service =
        Arc::new(TokenService::new(TokenConfig::new(SECRET)).unwrap());
    web::Data::new(AppState::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(MockTodoRepository::new()),
        token_service,
    ))
}

async fn register_and_login<S, B>(app: &S, username: &str) -> Value
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
    B::Error: std::fmt::Debug,
{
    let resp = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/v1/register")
            .set_json(json!({
                "username": username,
                "email": format!("{username}@example.com"),
                "password": "hunter22",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": username, "password": "hunter22" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    test::read_body_json(resp).await
}

#[actix_rt::test]
async fn register_login_and_todo_crud_round_trip() {
    let state = test_state();
    let app = test::init_service(create_app(state)).await;

    let login = register_and_login(&app, "alice").await;
    let token = login["token"].as_str().unwrap().to_string();
    assert_eq!(login["user"]["username"], "alice");
    assert_eq!(login["user"]["email"], "alice@example.com");
    // The stored hash never crosses the wire.
    assert!(login["user"].get("password_hash").is_none());
    assert!(login["user"].get("password").is_none());

    let auth = ("Authorization", format!("Bearer {token}"));

    // Empty list before any todo exists.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/todos")
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Value = test::read_body_json(resp).await;
    assert_eq!(todos.as_array().unwrap().len(), 0);

    // Create.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/todos")
            .insert_header(auth.clone())
            .set_json(json!({ "title": "buy milk", "description": "2 liters" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["title"], "buy milk");
    assert_eq!(created["completed"], false);
    let todo_id = created["id"].as_str().unwrap().to_string();

    // Fetch.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/todos/{todo_id}"))
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Partial update via PATCH keeps the untouched fields.
    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/v1/todos/{todo_id}"))
            .insert_header(auth.clone())
            .set_json(json!({ "completed": true }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["title"], "buy milk");
    assert_eq!(updated["completed"], true);

    // Full update via PUT.
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/todos/{todo_id}"))
            .insert_header(auth.clone())
            .set_json(json!({ "title": "buy oat milk", "description": "", "completed": false }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["title"], "buy oat milk");

    // Delete, then the fetch 404s.
    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/todos/{todo_id}"))
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/todos/{todo_id}"))
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Profile exposes public fields only.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/user-profile")
            .insert_header(auth)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let profile: Value = test::read_body_json(resp).await;
    assert_eq!(profile["username"], "alice");
    assert!(profile.get("password_hash").is_none());
}

#[actix_rt::test]
async fn login_failures_are_indistinguishable() {
    let state = test_state();
    let app = test::init_service(create_app(state)).await;
    register_and_login(&app, "bob").await;

    let unknown = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "nobody", "password": "hunter22" }))
            .to_request(),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    let unknown: Value = test::read_body_json(unknown).await;

    let wrong_password = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "bob", "password": "wrong-password" }))
            .to_request(),
    )
    .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password: Value = test::read_body_json(wrong_password).await;

    assert_eq!(unknown["error"], "invalid_credentials");
    assert_eq!(unknown["error"], wrong_password["error"]);
    assert_eq!(unknown["message"], wrong_password["message"]);
}

#[actix_rt::test]
async fn duplicate_registration_answers_400() {
    let state = test_state();
    let app = test::init_service(create_app(state)).await;
    register_and_login(&app, "carol").await;

    // A taken username is a client error, same status family as the
    // other registration validation failures.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/register")
            .set_json(json!({
                "username": "carol",
                "email": "other@example.com",
                "password": "hunter22",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "username_taken");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/register")
            .set_json(json!({
                "username": "carol2",
                "email": "carol@example.com",
                "password": "hunter22",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "email_taken");
}

#[actix_rt::test]
async fn gate_rejects_missing_header() {
    let state = test_state();
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/todos").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "missing_auth_header");
}

#[actix_rt::test]
async fn gate_rejects_wrong_scheme_before_any_lookup() {
    let state = test_state();
    let app = test::init_service(create_app(state)).await;

    for header in ["Token abc.def.ghi", "Bearer", "Bearer abc def", "bearer x"] {
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/todos")
                .insert_header(("Authorization", header))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "header: {header}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "malformed_auth_header", "header: {header}");
    }
}

#[actix_rt::test]
async fn gate_rejects_garbage_token() {
    let state = test_state();
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/todos")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "malformed_token");
}

#[actix_rt::test]
async fn gate_rejects_expired_token() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let login = register_and_login(&app, "dave").await;
    let user_id = login["user"]["id"].as_str().unwrap().parse().unwrap();

    let expired = state
        .token_service
        .issue_at(user_id, Utc::now() - Duration::hours(25))
        .unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/todos")
            .insert_header(("Authorization", format!("Bearer {expired}")))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "token_expired");
}

#[actix_rt::test]
async fn gate_rejects_token_whose_subject_was_deleted() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let login = register_and_login(&app, "erin").await;
    let token = login["token"].as_str().unwrap().to_string();
    let user_id = login["user"]["id"].as_str().unwrap().parse().unwrap();

    assert!(state.user_repository.remove(user_id).await);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/todos")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "unknown_user");
}

#[actix_rt::test]
async fn todos_are_scoped_to_their_owner() {
    let state = test_state();
    let app = test::init_service(create_app(state)).await;

    let frank = register_and_login(&app, "frank").await;
    let grace = register_and_login(&app, "grace").await;
    let frank_auth = (
        "Authorization",
        format!("Bearer {}", frank["token"].as_str().unwrap()),
    );
    let grace_auth = (
        "Authorization",
        format!("Bearer {}", grace["token"].as_str().unwrap()),
    );

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/todos")
            .insert_header(frank_auth)
            .set_json(json!({ "title": "frank's secret" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let todo_id = created["id"].as_str().unwrap().to_string();

    // Grace sees neither the list entry nor the item itself.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/todos")
            .insert_header(grace_auth.clone())
            .to_request(),
    )
    .await;
    let todos: Value = test::read_body_json(resp).await;
    assert_eq!(todos.as_array().unwrap().len(), 0);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/todos/{todo_id}"))
            .insert_header(grace_auth)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn unknown_route_answers_json_404() {
    let state = test_state();
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/no/such/route").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}
