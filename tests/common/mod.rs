//! Shared helpers: a local stand-in for the university timetable API.

use axum::extract::Query;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;

use donstu_timetable_bot::api::{ApiConfig, TimetableClient};

/// Serves a router on an ephemeral local port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock listener addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

/// A client with both institutions routed to the given base URL.
pub fn test_client(base_url: &str) -> TimetableClient {
    TimetableClient::with_config(ApiConfig {
        tpi_base_url: base_url.to_string(),
        dgty_base_url: base_url.to_string(),
        ..ApiConfig::default()
    })
    .expect("test client")
}

/// Happy-path upstream: accepts any password except `wrong-pass`, knows one
/// student group and one teacher id, and returns a single Monday lecture.
pub fn mock_upstream() -> Router {
    Router::new()
        .route("/tokenauth", post(tokenauth))
        .route("/UserInfo/Student", get(student_info))
        .route("/UserInfo/user", get(teacher_info))
        .route("/Rasp", get(schedule))
}

async fn tokenauth(Json(body): Json<Value>) -> Json<Value> {
    if body["password"] == "wrong-pass" {
        return Json(json!({ "state": -1 }));
    }
    Json(json!({
        "state": 1,
        "data": {
            "accessToken": "token-123",
            "data": { "id": 777 }
        }
    }))
}

async fn student_info(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    if params.get("studentID").map(String::as_str) != Some("777") {
        return Json(json!({ "data": null }));
    }
    Json(json!({ "data": { "group": { "item2": 4242 } } }))
}

async fn teacher_info(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    if params.get("userID").map(String::as_str) != Some("777") {
        return Json(json!({ "data": null }));
    }
    Json(json!({ "data": { "teacherID": 515 } }))
}

async fn schedule(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    if !params.contains_key("idGroup") && !params.contains_key("idTeacher") {
        return Json(json!({ "state": -1, "data": { "rasp": [] } }));
    }
    Json(json!({
        "data": {
            "rasp": [
                {
                    "дисциплина": "лек. Математика",
                    "преподаватель": "Иванов И.И.",
                    "группа": "ПИ-21",
                    "начало": "08:30",
                    "конец": "10:00",
                    "аудитория": "1-220",
                    "дата": "2024-09-02T00:00:00",
                    "деньНедели": 1,
                    "день_недели": "📅 Понедельник 2"
                }
            ]
        }
    }))
}
