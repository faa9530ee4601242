// krill-desk/tests/desk_flow.rs
// Full controller scenarios against an in-process mock of the roster
// backend: intents in, state plus notifications out.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use krill_client::{ClientConfig, EmployeeApi};
use krill_desk::{Desk, Field, Intent, ListState, Notification, NotificationLevel};
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Clone, Default)]
struct Backend {
    inner: Arc<Mutex<Store>>,
}

#[derive(Default)]
struct Store {
    employees: Vec<Value>,
    next_id: u32,
    fail_list: bool,
    list_calls: u32,
    create_calls: u32,
    update_calls: u32,
    delete_calls: u32,
    /// Raw JSON bodies of create/update requests, for wire assertions
    bodies: Vec<Value>,
}

impl Backend {
    async fn seed(&self, employee: Value) {
        let mut store = self.inner.lock().await;
        store.next_id += 1;
        store.employees.push(employee);
    }
}

async fn list_employees(State(backend): State<Backend>) -> impl IntoResponse {
    let mut store = backend.inner.lock().await;
    store.list_calls += 1;
    if store.fail_list {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "database unavailable"})),
        )
            .into_response();
    }
    Json(store.employees.clone()).into_response()
}

async fn create_employee(
    State(backend): State<Backend>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let mut store = backend.inner.lock().await;
    store.create_calls += 1;
    store.bodies.push(body.clone());

    store.next_id += 1;
    let mut employee = body;
    employee["id"] = json!(format!("e-{}", store.next_id));
    employee["isEnabled"] = json!(true);
    store.employees.push(employee.clone());
    Json(employee).into_response()
}

async fn update_employee(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let mut store = backend.inner.lock().await;
    store.update_calls += 1;
    store.bodies.push(body.clone());

    let found = store
        .employees
        .iter_mut()
        .find(|e| e.get("id").and_then(|v| v.as_str()) == Some(id.as_str()));
    match found {
        Some(employee) => {
            if let Some(fields) = body.as_object() {
                for (key, value) in fields {
                    employee[key] = value.clone();
                }
            }
            Json(employee.clone()).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("Employee {id} not found")})),
        )
            .into_response(),
    }
}

async fn delete_employee(
    State(backend): State<Backend>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut store = backend.inner.lock().await;
    store.delete_calls += 1;
    let before = store.employees.len();
    store
        .employees
        .retain(|e| e.get("id").and_then(|v| v.as_str()) != Some(id.as_str()));
    if store.employees.len() == before {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("Employee {id} not found")})),
        )
            .into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn spawn_backend() -> (String, Backend) {
    let backend = Backend::default();
    let app = Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/{id}",
            axum::routing::put(update_employee).delete(delete_employee),
        )
        .with_state(backend.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{addr}"), backend)
}

async fn desk_for(url: &str) -> Desk {
    Desk::new(&ClientConfig::new(url).with_timeout(5))
}

fn drain(rx: &mut tokio::sync::broadcast::Receiver<Notification>) -> Vec<Notification> {
    let mut out = Vec::new();
    while let Ok(notification) = rx.try_recv() {
        out.push(notification);
    }
    out
}

fn ann() -> Value {
    json!({
        "id": "e-1",
        "name": "Ann",
        "email": "a@x.com",
        "password": "secret",
        "isEnabled": true
    })
}

#[tokio::test]
async fn test_initial_fetch_reaches_ready_with_active_row() {
    let (url, backend) = spawn_backend().await;
    backend.seed(ann()).await;

    let mut desk = desk_for(&url).await;
    desk.handle(Intent::Load).await;

    let employees = desk.state().list.employees();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].name, "Ann");
    assert_eq!(employees[0].status_label(), "Active");
}

#[tokio::test]
async fn test_fetch_failure_blocks_page_and_notifies_once() {
    let (url, backend) = spawn_backend().await;
    backend.inner.lock().await.fail_list = true;

    let mut desk = desk_for(&url).await;
    let mut rx = desk.subscribe();
    desk.handle(Intent::Load).await;

    match &desk.state().list {
        ListState::Failed(message) => {
            assert_eq!(
                message,
                "Failed to fetch employees; verify the backend service is reachable."
            );
        }
        other => panic!("expected Failed, got {other:?}"),
    }

    let notes = drain(&mut rx);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].level, NotificationLevel::Error);
}

#[tokio::test]
async fn test_create_flow_closes_form_and_refreshes() {
    let (url, backend) = spawn_backend().await;
    backend.seed(ann()).await;

    let mut desk = desk_for(&url).await;
    let mut rx = desk.subscribe();
    desk.handle(Intent::Load).await;

    desk.handle(Intent::AddClicked).await;
    desk.handle(Intent::FieldChanged(Field::Name, "Bo".to_string()))
        .await;
    desk.handle(Intent::FieldChanged(Field::Email, "b@x.com".to_string()))
        .await;
    desk.handle(Intent::FieldChanged(Field::Password, "pw".to_string()))
        .await;
    desk.handle(Intent::Submit).await;

    assert!(!desk.state().form_open());
    let employees = desk.state().list.employees();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[1].name, "Bo");
    assert_eq!(employees[1].id.as_deref(), Some("e-2"));

    // pending toast resolves in place: same seq, success level
    let notes = drain(&mut rx);
    let pending = notes.iter().find(|n| n.pending).expect("pending toast");
    let resolved = notes
        .iter()
        .find(|n| !n.pending && n.seq == pending.seq)
        .expect("resolved toast");
    assert_eq!(resolved.level, NotificationLevel::Success);
    assert_eq!(resolved.message, "Employee created");
}

#[tokio::test]
async fn test_submit_without_required_fields_sends_nothing() {
    let (url, backend) = spawn_backend().await;
    let mut desk = desk_for(&url).await;
    let mut rx = desk.subscribe();

    desk.handle(Intent::AddClicked).await;
    desk.handle(Intent::FieldChanged(Field::Name, "Bo".to_string()))
        .await;
    desk.handle(Intent::Submit).await;

    assert_eq!(backend.inner.lock().await.create_calls, 0);
    assert!(desk.state().form_open());

    let notes = drain(&mut rx);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].level, NotificationLevel::Error);
    assert_eq!(notes[0].message, "Missing required fields: email, password");
}

#[tokio::test]
async fn test_edit_then_cancel_leaves_server_and_collection_untouched() {
    let (url, backend) = spawn_backend().await;
    backend.seed(ann()).await;

    let mut desk = desk_for(&url).await;
    let mut rx = desk.subscribe();
    desk.handle(Intent::Load).await;

    desk.handle(Intent::EditClicked("e-1".to_string())).await;
    desk.handle(Intent::FieldChanged(Field::Name, "Scrapped".to_string()))
        .await;
    desk.handle(Intent::CancelForm).await;

    let store = backend.inner.lock().await;
    assert_eq!(store.update_calls, 0);
    assert_eq!(store.list_calls, 1);
    drop(store);

    assert!(!desk.state().form_open());
    assert_eq!(desk.state().list.employees()[0].name, "Ann");

    let notes = drain(&mut rx);
    assert_eq!(notes.last().unwrap().level, NotificationLevel::Info);
}

#[tokio::test]
async fn test_update_with_blank_password_preserves_credential() {
    let (url, backend) = spawn_backend().await;
    backend.seed(ann()).await;

    let mut desk = desk_for(&url).await;
    desk.handle(Intent::Load).await;
    desk.handle(Intent::EditClicked("e-1".to_string())).await;
    desk.handle(Intent::FieldChanged(Field::Name, "Ann B".to_string()))
        .await;
    desk.handle(Intent::Submit).await;

    assert!(!desk.state().form_open());
    assert_eq!(desk.state().list.employees()[0].name, "Ann B");

    let store = backend.inner.lock().await;
    let body = store.bodies[0].as_object().unwrap();
    assert!(!body.contains_key("password"));
    assert_eq!(store.employees[0].get("password").unwrap(), "secret");
}

#[tokio::test]
async fn test_delete_needs_confirmation_and_dismiss_sends_nothing() {
    let (url, backend) = spawn_backend().await;
    backend.seed(ann()).await;

    let mut desk = desk_for(&url).await;
    desk.handle(Intent::Load).await;

    desk.handle(Intent::DeleteClicked("e-1".to_string())).await;
    assert_eq!(backend.inner.lock().await.delete_calls, 0);
    assert_eq!(desk.state().pending_delete.as_deref(), Some("e-1"));

    desk.handle(Intent::DismissDelete).await;
    assert_eq!(backend.inner.lock().await.delete_calls, 0);
    assert!(desk.state().pending_delete.is_none());
    assert_eq!(desk.state().list.employees().len(), 1);
}

#[tokio::test]
async fn test_confirmed_delete_removes_row_after_refresh() {
    let (url, backend) = spawn_backend().await;
    backend.seed(ann()).await;

    let mut desk = desk_for(&url).await;
    let mut rx = desk.subscribe();
    desk.handle(Intent::Load).await;

    desk.handle(Intent::DeleteClicked("e-1".to_string())).await;
    desk.handle(Intent::ConfirmDelete).await;

    assert_eq!(backend.inner.lock().await.delete_calls, 1);
    assert!(desk.state().list.employees().is_empty());

    let notes = drain(&mut rx);
    assert!(
        notes
            .iter()
            .any(|n| n.level == NotificationLevel::Success && n.message == "Employee deleted")
    );
}

#[tokio::test]
async fn test_failed_delete_keeps_collection_and_skips_refresh() {
    let (url, backend) = spawn_backend().await;
    backend.seed(ann()).await;

    let mut desk = desk_for(&url).await;
    let mut rx = desk.subscribe();
    desk.handle(Intent::Load).await;

    desk.handle(Intent::DeleteClicked("ghost".to_string())).await;
    desk.handle(Intent::ConfirmDelete).await;

    let store = backend.inner.lock().await;
    assert_eq!(store.delete_calls, 1);
    // nothing changed server-side, so no refresh happened
    assert_eq!(store.list_calls, 1);
    drop(store);

    assert_eq!(desk.state().list.employees().len(), 1);
    assert_eq!(desk.state().list.employees()[0].id.as_deref(), Some("e-1"));

    let notes = drain(&mut rx);
    let resolved = notes.iter().find(|n| !n.pending).expect("resolved toast");
    assert_eq!(resolved.level, NotificationLevel::Error);
}

#[tokio::test]
async fn test_collection_after_mutation_equals_one_list_snapshot() {
    let (url, backend) = spawn_backend().await;
    backend.seed(ann()).await;

    let mut desk = desk_for(&url).await;
    desk.handle(Intent::Load).await;

    desk.handle(Intent::AddClicked).await;
    desk.handle(Intent::FieldChanged(Field::Name, "Bo".to_string()))
        .await;
    desk.handle(Intent::FieldChanged(Field::Email, "b@x.com".to_string()))
        .await;
    desk.handle(Intent::FieldChanged(Field::Password, "pw".to_string()))
        .await;
    desk.handle(Intent::Submit).await;

    // the desk holds exactly what one list() call reports, no local patching
    let api = EmployeeApi::new(&ClientConfig::new(&url).with_timeout(5));
    let snapshot = api.list().await.expect("list");
    assert_eq!(desk.state().list.employees(), snapshot.as_slice());
}
