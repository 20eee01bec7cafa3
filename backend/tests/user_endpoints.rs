//! End-to-end endpoint scenarios over an in-memory repository.

use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};

use backend::domain::ports::{UserPersistenceError, UserRepository};
use backend::domain::User;
use backend::inbound::http::configure;
use backend::inbound::http::state::HttpState;

/// In-memory repository assigning sequential identifiers like the store.
#[derive(Default)]
struct InMemoryUserRepository {
    state: Mutex<(i32, Vec<User>)>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let state = self.state.lock().expect("state lock");
        Ok(state.1.clone())
    }

    async fn create(&self, name: &str) -> Result<(), UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        state.0 += 1;
        let id = state.0;
        state.1.push(User {
            id,
            name: name.to_owned(),
        });
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        state.1.retain(|user| user.id != id);
        Ok(())
    }
}

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::default());
    App::new()
        .app_data(web::Data::new(HttpState::new(repository)))
        .configure(configure)
}

#[actix_web::test]
async fn create_list_delete_round_trip() {
    let app = actix_test::init_service(test_app()).await;

    // Create Alice.
    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Alice" }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    // List contains exactly one record named Alice with a numeric id.
    let listed = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    assert_eq!(listed.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(listed).await;
    let users = body.as_array().expect("array body");
    assert_eq!(users.len(), 1);
    let alice = users.first().expect("one user");
    assert_eq!(alice.get("name").and_then(Value::as_str), Some("Alice"));
    let id = alice
        .get("id")
        .and_then(Value::as_i64)
        .expect("numeric id");

    // Delete that id.
    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/users/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);

    // List is empty again.
    let listed = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(listed).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn deleting_an_unknown_id_reports_success() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/users/999")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = actix_test::read_body(response).await;
    assert_eq!(body, "User deleted");
}

#[actix_web::test]
async fn listing_before_any_create_returns_an_empty_array() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!([]));
}
