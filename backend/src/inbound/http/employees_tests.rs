//! Tests for the employee resource handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::Trace;
use crate::domain::TRACE_ID_HEADER;
use crate::domain::ports::{EmployeePersistenceError, MockEmployeeRepository};
use crate::outbound::memory::InMemoryEmployeeRepository;

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(query_config())
        .wrap(Trace)
        .service(
            web::scope("/api/v1")
                .service(get_employees)
                .service(create_employee)
                .service(update_employee)
                .service(delete_employee),
        )
}

#[fixture]
fn memory_state() -> HttpState {
    HttpState::from_repository(Arc::new(InMemoryEmployeeRepository::new()))
}

#[fixture]
fn ivan() -> Value {
    json!({
        "name": "Иван",
        "email": "ivan@x.com",
        "age": 25,
        "department": "IT",
        "salary": 50000,
    })
}

async fn json_body(response: actix_web::dev::ServiceResponse) -> Value {
    let bytes = actix_test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("JSON body")
}

#[rstest]
#[actix_web::test]
async fn create_update_delete_scenario(memory_state: HttpState, ivan: Value) {
    let app = actix_test::init_service(test_app(memory_state)).await;

    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(&ivan)
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = json_body(created).await;
    let id = created["id"].as_str().expect("generated id").to_owned();
    assert_eq!(created["name"], "Иван");

    let mut raise = ivan.clone();
    raise["salary"] = json!(55000);
    let updated = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/employees?id={id}"))
            .set_json(&raise)
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = json_body(updated).await;
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["salary"], 55000);
    for field in ["name", "email", "age", "department"] {
        assert_eq!(updated[field], ivan[field], "{field} changed");
    }

    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/employees?id={id}"))
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);
    assert_eq!(json_body(deleted).await, json!({"message": "employee deleted"}));

    let missing = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/employees?id={id}"))
            .to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(missing).await["code"], "not_found");
}

#[rstest]
#[case("")]
#[case("?id=")]
#[actix_web::test]
async fn list_returns_every_employee(ivan: Value, #[case] query: &str) {
    let repo = Arc::new(InMemoryEmployeeRepository::new());
    let app = actix_test::init_service(test_app(HttpState::from_repository(repo))).await;
    for _ in 0..2 {
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/employees")
                .set_json(&ivan)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/employees{query}"))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let list = json_body(res).await;
    assert_eq!(list.as_array().map(Vec::len), Some(2));
}

#[rstest]
#[actix_web::test]
async fn list_of_empty_store_is_empty_array(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/employees").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await, json!([]));
}

#[rstest]
#[case("name", json!(""), "empty_value")]
#[case("email", json!("not-an-email"), "invalid_email")]
#[case("age", json!(0), "not_positive")]
#[case("age", json!(-5), "not_positive")]
#[case("department", json!(""), "empty_value")]
#[case("salary", json!(-1), "negative")]
#[actix_web::test]
async fn create_rejects_invalid_fields(
    ivan: Value,
    #[case] field: &str,
    #[case] value: Value,
    #[case] code: &str,
) {
    let repo = Arc::new(InMemoryEmployeeRepository::new());
    let app = actix_test::init_service(test_app(HttpState::from_repository(repo.clone()))).await;
    let mut body = ivan;
    body[field] = value;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(&body)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error = json_body(res).await;
    assert_eq!(error["code"], "invalid_request");
    assert_eq!(error["details"], json!({"field": field, "code": code}));
    assert_eq!(
        crate::domain::ports::EmployeeRepository::count(repo.as_ref())
            .await
            .expect("count"),
        0
    );
}

#[rstest]
#[case("email", json!("not-an-email"), "invalid_email")]
#[case("age", json!(25.5), "not_whole_number")]
#[case("salary", json!(-1), "negative")]
#[actix_web::test]
async fn update_rejects_invalid_fields_and_keeps_record(
    memory_state: HttpState,
    ivan: Value,
    #[case] field: &str,
    #[case] value: Value,
    #[case] code: &str,
) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(&ivan)
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = json_body(created).await;
    let id = created["id"].as_str().expect("generated id").to_owned();
    let mut body = ivan;
    body[field] = value;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/employees?id={id}"))
            .set_json(&body)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error = json_body(res).await;
    assert_eq!(error["code"], "invalid_request");
    assert_eq!(error["details"], json!({"field": field, "code": code}));

    let stored = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/employees?id={id}"))
            .to_request(),
    )
    .await;
    assert_eq!(stored.status(), StatusCode::OK);
    assert_eq!(json_body(stored).await, created);
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_invalid_request(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/employees")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error = json_body(res).await;
    assert_eq!(error["details"]["code"], "invalid_json");
}

#[rstest]
#[actix_web::test]
async fn wrong_content_type_is_invalid_request(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/employees")
            .insert_header(("content-type", "text/plain"))
            .set_payload("name=Иван")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn malformed_id_reports_value(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/employees?id=abc")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error = json_body(res).await;
    assert_eq!(
        error["details"],
        json!({"field": "id", "value": "abc", "code": "invalid_uuid"})
    );
}

#[rstest]
#[case::put_without_id(actix_test::TestRequest::put().uri("/api/v1/employees"), true)]
#[case::put_empty_id(actix_test::TestRequest::put().uri("/api/v1/employees?id="), true)]
#[case::delete_without_id(actix_test::TestRequest::delete().uri("/api/v1/employees"), false)]
#[actix_web::test]
async fn mutations_require_id(
    memory_state: HttpState,
    ivan: Value,
    #[case] request: actix_test::TestRequest,
    #[case] with_body: bool,
) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    let request = if with_body {
        request.set_json(&ivan)
    } else {
        request
    };

    let res = actix_test::call_service(&app, request.to_request()).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error = json_body(res).await;
    assert_eq!(error["details"], json!({"field": "id", "code": "missing_field"}));
}

#[rstest]
#[actix_web::test]
async fn update_and_delete_of_unknown_id_are_not_found(memory_state: HttpState, ivan: Value) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    let uri = format!("/api/v1/employees?id={}", crate::domain::EmployeeId::random());

    let put = actix_test::call_service(
        &app,
        actix_test::TestRequest::put().uri(&uri).set_json(&ivan).to_request(),
    )
    .await;
    let delete =
        actix_test::call_service(&app, actix_test::TestRequest::delete().uri(&uri).to_request())
            .await;

    assert_eq!(put.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case(EmployeePersistenceError::connection("refused"), StatusCode::SERVICE_UNAVAILABLE, "service_unavailable")]
#[case(EmployeePersistenceError::query("boom"), StatusCode::INTERNAL_SERVER_ERROR, "internal_error")]
#[actix_web::test]
async fn store_failures_map_to_5xx(
    #[case] failure: EmployeePersistenceError,
    #[case] status: StatusCode,
    #[case] code: &str,
) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_list().times(1).return_once(move || Err(failure));
    let app = actix_test::init_service(test_app(HttpState::from_repository(Arc::new(repo)))).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/employees").to_request(),
    )
    .await;

    assert_eq!(res.status(), status);
    let trace_header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let error = json_body(res).await;
    assert_eq!(error["code"], code);
    assert_eq!(error["traceId"].as_str(), trace_header.as_deref());
}

#[rstest]
#[actix_web::test]
async fn internal_failures_are_redacted() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_list()
        .times(1)
        .return_once(|| Err(EmployeePersistenceError::query("relation employees missing")));
    let app = actix_test::init_service(test_app(HttpState::from_repository(Arc::new(repo)))).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/employees").to_request(),
    )
    .await;

    assert_eq!(json_body(res).await["message"], "Internal server error");
}
