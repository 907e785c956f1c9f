//! End-to-end tests for the employee HTTP API
//! Run: cargo test -p employee-server --test employee_api

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use employee_server::{Config, DbService, ServerState, build_app};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    app: Router,
    state: ServerState,
    _tmp: TempDir,
}

async fn spawn_app() -> TestApp {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config).await.unwrap();
    TestApp {
        app: build_app(state.clone()),
        state,
        _tmp: tmp,
    }
}

impl TestApp {
    async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(&self, payload: Value) -> Value {
        let (status, body) = self.request("POST", "/employees", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
        body
    }
}

fn employee(id: &str, department: &str, salary: f64, joining_date: &str, skills: &[&str]) -> Value {
    json!({
        "employee_id": id,
        "name": format!("Employee {id}"),
        "department": department,
        "salary": salary,
        "joining_date": joining_date,
        "skills": skills,
    })
}

fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|e| e["employee_id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let app = spawn_app().await;
    let (status, body) = app.request("GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to the Employee Management API!");

    let (status, body) = app.request("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn create_then_get_round_trips_fields() {
    let app = spawn_app().await;
    let payload = json!({
        "employee_id": "E456",
        "name": "Jane Smith",
        "department": "Human Resources",
        "salary": 65000,
        "joining_date": "2023-03-20",
        "skills": ["Communication", "Recruitment", "HR Policies"]
    });

    let created = app.create(payload).await;
    assert_eq!(created["employee_id"], "E456");
    assert!(created.get("id").is_none());

    let (status, fetched) = app.request("GET", "/employees/E456", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Jane Smith");
    assert_eq!(fetched["department"], "Human Resources");
    assert_eq!(fetched["salary"].as_f64(), Some(65000.0));
    assert_eq!(fetched["joining_date"], "2023-03-20");
    assert_eq!(
        fetched["skills"],
        json!(["Communication", "Recruitment", "HR Policies"])
    );
}

#[tokio::test]
async fn create_trims_employee_id_and_defaults_skills() {
    let app = spawn_app().await;
    let created = app
        .create(json!({
            "employee_id": "  E7  ",
            "name": "Sam",
            "department": "Ops",
            "salary": 1.5,
            "joining_date": "2021-07-01"
        }))
        .await;
    assert_eq!(created["employee_id"], "E7");
    assert_eq!(created["skills"], json!([]));

    let (status, _) = app.request("GET", "/employees/E7", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn duplicate_id_is_rejected_and_first_record_kept() {
    let app = spawn_app().await;
    app.create(employee("E1", "Engineering", 100.0, "2022-01-01", &[]))
        .await;

    let mut second = employee("E1", "Sales", 999.0, "2024-01-01", &[]);
    second["name"] = json!("Impostor");
    let (status, body) = app.request("POST", "/employees", Some(second)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Employee with ID 'E1' already exists.");

    let (_, fetched) = app.request("GET", "/employees/E1", None).await;
    assert_eq!(fetched["name"], "Employee E1");
    assert_eq!(fetched["department"], "Engineering");
}

#[tokio::test]
async fn invalid_payloads_are_rejected() {
    let app = spawn_app().await;

    let cases = [
        employee("E1", "A", 0.0, "2022-01-01", &[]),
        employee("E1", "A", -10.0, "2022-01-01", &[]),
        employee("   ", "A", 10.0, "2022-01-01", &[]),
        employee("E1", "A", 10.0, "2022-13-01", &[]),
        json!({ "employee_id": "E1", "name": "No department", "salary": 10, "joining_date": "2022-01-01" }),
    ];

    for payload in cases {
        let (status, body) = app.request("POST", "/employees", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {payload}");
        assert_eq!(body["code"], "E0002");
    }

    let (status, body) = app.request("GET", "/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let app = spawn_app().await;
    let (status, body) = app.request("GET", "/employees/NOPE", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee with ID 'NOPE' not found");
}

#[tokio::test]
async fn empty_update_is_rejected_and_record_unchanged() {
    let app = spawn_app().await;
    let created = app
        .create(employee("E1", "Engineering", 100.0, "2022-01-01", &["Rust"]))
        .await;

    let (status, body) = app.request("PUT", "/employees/E1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No update fields provided.");

    let (_, fetched) = app.request("GET", "/employees/E1", None).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn partial_update_leaves_other_fields() {
    let app = spawn_app().await;
    app.create(employee("E1", "Engineering", 100.0, "2022-01-01", &["Rust"]))
        .await;

    let (status, updated) = app
        .request(
            "PUT",
            "/employees/E1",
            Some(json!({ "salary": 85000, "skills": ["Python", "MongoDB"] })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["salary"].as_f64(), Some(85000.0));
    assert_eq!(updated["skills"], json!(["Python", "MongoDB"]));
    assert_eq!(updated["name"], "Employee E1");
    assert_eq!(updated["department"], "Engineering");
    assert_eq!(updated["joining_date"], "2022-01-01");

    let (status, updated) = app
        .request("PUT", "/employees/E1", Some(json!({ "joining_date": "2020-02-29" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["joining_date"], "2020-02-29");
    assert_eq!(updated["salary"].as_f64(), Some(85000.0));

    let (_, fetched) = app.request("GET", "/employees/E1", None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn invalid_update_values_are_rejected() {
    let app = spawn_app().await;
    let created = app
        .create(employee("E1", "Engineering", 100.0, "2022-01-01", &[]))
        .await;

    for payload in [
        json!({ "salary": 0 }),
        json!({ "salary": -5 }),
        json!({ "name": null }),
        json!({ "joining_date": "not-a-date" }),
    ] {
        let (status, _) = app.request("PUT", "/employees/E1", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {payload}");
    }

    let (_, fetched) = app.request("GET", "/employees/E1", None).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let app = spawn_app().await;
    let (status, body) = app
        .request("PUT", "/employees/GHOST", Some(json!({ "name": "Nobody" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee with ID 'GHOST' not found");

    let (status, _) = app.request("GET", "/employees/GHOST", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_record() {
    let app = spawn_app().await;

    let (status, _) = app.request("DELETE", "/employees/E1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.create(employee("E1", "Engineering", 100.0, "2022-01-01", &[]))
        .await;
    let (status, body) = app.request("DELETE", "/employees/E1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee with ID 'E1' deleted successfully.");

    let (status, _) = app.request("GET", "/employees/E1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.request("DELETE", "/employees/E1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_paginates_newest_first() {
    let app = spawn_app().await;
    for month in 1..=12 {
        let id = format!("E{month:02}");
        let department = if month % 2 == 0 { "Even" } else { "Odd" };
        let date = format!("2023-{month:02}-15");
        app.create(employee(&id, department, 1000.0, &date, &[]))
            .await;
    }

    let (status, first) = app.request("GET", "/employees?page_size=10", None).await;
    assert_eq!(status, StatusCode::OK);
    let first_ids = ids(&first);
    assert_eq!(first_ids.len(), 10);
    assert_eq!(first_ids[0], "E12");
    assert_eq!(first_ids[9], "E03");

    let dates: Vec<&str> = first
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["joining_date"].as_str().unwrap())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);

    let (_, second) = app
        .request("GET", "/employees?page=2&page_size=10", None)
        .await;
    assert_eq!(ids(&second), vec!["E02", "E01"]);

    let (_, beyond) = app
        .request("GET", "/employees?page=3&page_size=10", None)
        .await;
    assert_eq!(beyond, json!([]));

    // Default page size is 10
    let (_, default_page) = app.request("GET", "/employees", None).await;
    assert_eq!(ids(&default_page).len(), 10);
}

#[tokio::test]
async fn list_pages_cover_shared_joining_dates_once() {
    let app = spawn_app().await;
    for n in 1..=25 {
        let id = format!("E{n:02}");
        app.create(employee(&id, "Ops", 1000.0, "2023-01-01", &[]))
            .await;
    }

    let mut seen = Vec::new();
    for page in 1..=3 {
        let uri = format!("/employees?page={page}&page_size=10");
        let (status, body) = app.request("GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        seen.extend(ids(&body));
    }

    let expected: Vec<String> = (1..=25).map(|n| format!("E{n:02}")).collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn list_filters_by_department() {
    let app = spawn_app().await;
    app.create(employee("E1", "Engineering", 100.0, "2022-01-01", &[]))
        .await;
    app.create(employee("E2", "Sales", 100.0, "2022-02-01", &[]))
        .await;
    app.create(employee("E3", "Engineering", 100.0, "2022-03-01", &[]))
        .await;

    let (status, body) = app
        .request("GET", "/employees?department=Engineering", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["E3", "E1"]);

    let (_, body) = app.request("GET", "/employees?department=Legal", None).await;
    assert_eq!(body, json!([]));

    // An empty department means no filter
    let (_, body) = app.request("GET", "/employees?department=", None).await;
    assert_eq!(ids(&body).len(), 3);
}

#[tokio::test]
async fn list_rejects_out_of_range_pagination() {
    let app = spawn_app().await;
    for uri in [
        "/employees?page=0",
        "/employees?page_size=0",
        "/employees?page_size=101",
        "/employees?page=abc",
    ] {
        let (status, body) = app.request("GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {uri}");
        assert_eq!(body["code"], "E0002");
    }

    let (status, _) = app.request("GET", "/employees?page_size=100", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn average_salary_groups_by_department() {
    let app = spawn_app().await;

    let (status, body) = app.request("GET", "/employees/avg-salary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    app.create(employee("E1", "B", 300.0, "2022-01-01", &[])).await;
    app.create(employee("E2", "A", 100.0, "2022-01-02", &[])).await;
    app.create(employee("E3", "A", 200.0, "2022-01-03", &[])).await;

    let (status, body) = app.request("GET", "/employees/avg-salary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "department": "A", "avg_salary": 150.0 },
            { "department": "B", "avg_salary": 300.0 }
        ])
    );
}

#[tokio::test]
async fn average_salary_rounds_to_cents() {
    let app = spawn_app().await;
    app.create(employee("E1", "A", 100.0, "2022-01-01", &[])).await;
    app.create(employee("E2", "A", 100.0, "2022-01-02", &[])).await;
    app.create(employee("E3", "A", 100.01, "2022-01-03", &[])).await;

    let (_, body) = app.request("GET", "/employees/avg-salary", None).await;
    assert_eq!(body[0]["avg_salary"].as_f64(), Some(100.0));
}

#[tokio::test]
async fn search_matches_exact_skill() {
    let app = spawn_app().await;
    app.create(employee("E1", "A", 1.0, "2022-01-01", &["Python", "Docker"]))
        .await;
    app.create(employee("E2", "A", 1.0, "2022-01-02", &["python"]))
        .await;
    app.create(employee("E3", "A", 1.0, "2022-01-03", &["Python3"]))
        .await;
    app.create(employee("E4", "B", 1.0, "2022-01-04", &["Go", "Python"]))
        .await;

    let (status, body) = app.request("GET", "/employees/search?skill=Python", None).await;
    assert_eq!(status, StatusCode::OK);
    let mut found = ids(&body);
    found.sort();
    assert_eq!(found, vec!["E1", "E4"]);

    let (_, body) = app.request("GET", "/employees/search?skill=Rust", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn search_requires_skill() {
    let app = spawn_app().await;
    for uri in ["/employees/search", "/employees/search?skill=", "/employees/search?skill=%20"] {
        let (status, _) = app.request("GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {uri}");
    }
}

#[tokio::test]
async fn uninitialized_store_returns_500() {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_string_lossy().to_string(), 0);
    let state = ServerState::new(config, DbService::uninitialized());
    let app = TestApp {
        app: build_app(state.clone()),
        state,
        _tmp: tmp,
    };

    let (status, body) = app.request("GET", "/employees/E1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Database client not initialized");

    let (status, _) = app.request("GET", "/employees", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = app.request("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn closed_store_returns_500() {
    let app = spawn_app().await;
    app.create(employee("E1", "A", 1.0, "2022-01-01", &[])).await;

    app.state.shutdown();

    let (status, body) = app.request("GET", "/employees/E1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "E9003");
}
