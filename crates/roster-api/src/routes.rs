//! API routes

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::extractors::AppState;
use crate::handlers::users;

/// User resource routes, state still to be supplied
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(users::create_user))
        .route("/get", get(users::list_users))
        .route("/get/:id", get(users::get_user))
        .route("/update/:id", patch(users::update_user))
        .route("/delete", delete(users::delete_users))
        .route("/delete/:id", delete(users::delete_users))
}

/// Router bound to its state
pub fn app(state: AppState) -> Router {
    router().with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use fake::faker::name::en::Name;
    use fake::Fake;
    use roster_db::testing::store_down;
    use roster_db::{InMemoryUserRepository, MockUserRepository, UserRepository};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> (Router, Arc<InMemoryUserRepository>) {
        let store = Arc::new(InMemoryUserRepository::new());
        (app(AppState::new(store.clone())), store)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn create(app: &Router, full_name: &str, role: &str, efficiency: i64) -> i64 {
        let (status, body) = send(
            app,
            "POST",
            "/create",
            Some(json!({"full_name": full_name, "role": role, "efficiency": efficiency})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["result"]["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_id() {
        let (app, _) = test_app();

        let (status, body) = send(
            &app,
            "POST",
            "/create",
            Some(json!({"full_name": "John Doe", "role": "developer", "efficiency": 85})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"success": true, "result": {"id": 1}}));
    }

    #[tokio::test]
    async fn test_create_with_fake_data() {
        let (app, store) = test_app();

        for _ in 0..5 {
            let name: String = Name().fake();
            let efficiency: i64 = (0..=100).fake();
            create(&app, &name, "developer", efficiency).await;
        }

        assert_eq!(store.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_create_accepts_integral_float() {
        let (app, store) = test_app();

        let (status, body) = send(
            &app,
            "POST",
            "/create",
            Some(json!({"full_name": "John Doe", "role": "developer", "efficiency": 85.0})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let id = body["result"]["id"].as_i64().unwrap();
        assert_eq!(store.find_by_id(id).await.unwrap().unwrap().efficiency, 85);
    }

    #[tokio::test]
    async fn test_create_missing_full_name() {
        let (app, store) = test_app();

        let (status, body) = send(
            &app,
            "POST",
            "/create",
            Some(json!({"full_name": "", "role": "developer", "efficiency": 85})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({
                "success": false,
                "result": {"error": {"full_name": ["The full name field is required."]}}
            })
        );
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_reports_every_invalid_field() {
        let (app, _) = test_app();

        let (status, body) = send(
            &app,
            "POST",
            "/create",
            Some(json!({"full_name": "x".repeat(256), "role": 7, "efficiency": "fast"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["result"]["error"],
            json!({
                "efficiency": ["The efficiency field must be an integer."],
                "full_name": ["The full name field must not be greater than 255 characters."],
                "role": ["The role field must be a string."]
            })
        );
    }

    #[tokio::test]
    async fn test_create_without_body() {
        let (app, _) = test_app();

        let (status, body) = send(&app, "POST", "/create", None).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error = body["result"]["error"].as_object().unwrap();
        assert_eq!(error.len(), 3);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let (app, _) = test_app();
        let id = create(&app, "John Doe", "developer", 85).await;

        let (status, body) = send(&app, "GET", &format!("/get/{}", id), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "result": {"users": [{"id": id, "full_name": "John Doe", "role": "developer", "efficiency": 85}]}
            })
        );
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let (app, _) = test_app();

        for uri in ["/get/99999", "/get/0", "/get/-3", "/get/abc"] {
            let (status, body) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(body, json!({"success": false, "result": {"error": "User not found"}}));
        }
    }

    #[tokio::test]
    async fn test_list_and_role_filter() {
        let (app, _) = test_app();
        let (status, body) = send(&app, "GET", "/get", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "result": {"users": []}}));

        let first = create(&app, "John Doe", "developer", 85).await;
        create(&app, "Jane Roe", "manager", 70).await;
        let third = create(&app, "Max Poe", "developer", 60).await;

        let (_, body) = send(&app, "GET", "/get", None).await;
        assert_eq!(body["result"]["users"].as_array().unwrap().len(), 3);

        let (status, body) = send(&app, "GET", "/get?role=developer", None).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = body["result"]["users"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![first, third]);

        let (_, body) = send(&app, "GET", "/get?role=designer", None).await;
        assert_eq!(body["result"]["users"], json!([]));

        let (status, body) = send(&app, "GET", "/get?role=", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["users"], json!([]));
    }

    #[tokio::test]
    async fn test_repeated_role_uses_last_value() {
        let (app, _) = test_app();
        create(&app, "John Doe", "developer", 85).await;
        let manager = create(&app, "Jane Roe", "manager", 70).await;

        let (status, body) = send(&app, "GET", "/get?role=developer&role=manager", None).await;

        assert_eq!(status, StatusCode::OK);
        let users = body["result"]["users"].as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["id"], manager);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let (app, _) = test_app();
        let id = create(&app, "John Doe", "developer", 85).await;

        let (status, body) = send(
            &app,
            "PATCH",
            &format!("/update/{}", id),
            Some(json!({"full_name": "Jane Doe", "role": "manager"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "result": {"id": id, "full_name": "Jane Doe", "role": "manager", "efficiency": 85}
            })
        );

        let (_, body) = send(&app, "GET", &format!("/get/{}", id), None).await;
        assert_eq!(body["result"]["users"][0]["full_name"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_update_empty_body_returns_record() {
        let (app, _) = test_app();
        let id = create(&app, "John Doe", "developer", 85).await;

        let (status, body) = send(&app, "PATCH", &format!("/update/{}", id), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["efficiency"], 85);
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let (app, _) = test_app();

        let (status, body) = send(&app, "PATCH", "/update/99999", Some(json!({"role": "manager"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["result"]["error"], "User not found");

        let (status, body) = send(&app, "PATCH", "/update/99999", Some(json!({"efficiency": -1}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["result"]["error"]["efficiency"],
            json!(["The efficiency field must be at least 0."])
        );
    }

    #[tokio::test]
    async fn test_update_non_numeric_id_validates_first() {
        let (app, _) = test_app();

        let (status, body) = send(&app, "PATCH", "/update/abc", Some(json!({"efficiency": -1}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["result"]["error"]["efficiency"],
            json!(["The efficiency field must be at least 0."])
        );

        let (status, body) = send(&app, "PATCH", "/update/abc", Some(json!({"efficiency": 1}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["result"]["error"], "User not found");
    }

    #[tokio::test]
    async fn test_delete_returns_snapshot() {
        let (app, _) = test_app();
        let id = create(&app, "John Doe", "developer", 85).await;

        let (status, body) = send(&app, "DELETE", &format!("/delete/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "result": {"id": id, "full_name": "John Doe", "role": "developer", "efficiency": 85}
            })
        );

        let (status, _) = send(&app, "GET", &format!("/get/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, "DELETE", &format!("/delete/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["result"]["error"], "User not found");
    }

    #[tokio::test]
    async fn test_delete_non_numeric_id_keeps_rows() {
        let (app, store) = test_app();
        create(&app, "John Doe", "developer", 85).await;

        let (status, body) = send(&app, "DELETE", "/delete/abc", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["result"]["error"], "User not found");
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_all_omits_result() {
        let (app, store) = test_app();
        create(&app, "John Doe", "developer", 85).await;
        create(&app, "Jane Roe", "manager", 70).await;

        let (status, body) = send(&app, "DELETE", "/delete", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));
        assert_eq!(store.count().await.unwrap(), 0);

        let next = create(&app, "Max Poe", "developer", 60).await;
        assert_eq!(next, 3);
    }

    #[tokio::test]
    async fn test_store_failure_is_500() {
        let message = store_down().to_string();
        let mut store = MockUserRepository::new();
        store.expect_find_all().returning(|_| Err(store_down()));
        store.expect_create().returning(|_| Err(store_down()));
        store.expect_delete_all().returning(|| Err(store_down()));
        let app = app(AppState::new(Arc::new(store)));

        let (status, body) = send(&app, "GET", "/get", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"success": false, "result": {"error": message}}));

        let (status, _) = send(
            &app,
            "POST",
            "/create",
            Some(json!({"full_name": "John Doe", "role": "developer", "efficiency": 85})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, body) = send(&app, "DELETE", "/delete", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["result"]["error"], json!(message));
    }
}
