//! Request-executor behavior against a deterministic transport and a local
//! mock server.

mod support;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::json;
use std::sync::Arc;
use support::{
    FailingTransport, RecordingNavigator, RecordingNotifier, StaticTransport, UiEvent, UiLog,
};
use takaful_client::config::ClientConfig;
use takaful_client::execution::executor::{RequestExecutor, RequestExecutorBuilder};
use takaful_client::execution::http::transport::HttpTransport;
use takaful_client::types::request::RequestOptions;

fn config() -> ClientConfig {
    ClientConfig::new("https://api.takaful.example").with_bearer_token("test-token")
}

fn executor_with(transport: Arc<dyn HttpTransport>, ui: &Arc<UiLog>) -> RequestExecutor {
    RequestExecutorBuilder::new(config())
        .with_transport(transport)
        .with_notifier(Arc::new(RecordingNotifier(ui.clone())))
        .with_navigator(Arc::new(RecordingNavigator(ui.clone())))
        .build()
        .expect("executor builds")
}

#[tokio::test]
async fn caller_headers_override_defaults_and_auth_is_attached() {
    let transport = StaticTransport::json(200, "{}");
    let ui = UiLog::new();
    let executor = executor_with(transport.clone(), &ui);

    executor
        .execute(
            RequestOptions::new("/list-needy")
                .method(Method::GET)
                .header("Content-Type", "text/plain"),
        )
        .await;

    let request = transport.last_request();
    assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), "text/plain");
    assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "Bearer test-token");
    assert_eq!(request.url, "https://api.takaful.example/list-needy");
}

#[tokio::test]
async fn json_bodies_round_trip_through_serialization() {
    let transport = StaticTransport::json(200, "{}");
    let ui = UiLog::new();
    let executor = executor_with(transport.clone(), &ui);

    let body = json!({"name": "Amal", "familySize": 4, "tags": ["north", "urgent"]});
    executor
        .execute(RequestOptions::new("/create-needy").json(body.clone()))
        .await;

    let sent = transport.last_request().body.expect("body was sent");
    let parsed: serde_json::Value = serde_json::from_slice(&sent).unwrap();
    assert_eq!(parsed, body);
}

#[tokio::test]
async fn raw_string_bodies_pass_through_unmodified() {
    let transport = StaticTransport::json(200, "{}");
    let ui = UiLog::new();
    let executor = executor_with(transport.clone(), &ui);

    executor
        .execute(RequestOptions::new("/import").raw("a,b,c\n1,2,3"))
        .await;

    let sent = transport.last_request().body.expect("body was sent");
    assert_eq!(sent, b"a,b,c\n1,2,3");
}

#[tokio::test]
async fn success_with_json_payload_keeps_payload_and_server_message() {
    let transport = StaticTransport::json(200, r#"{"data": {"x": 1}, "message": "stored"}"#);
    let ui = UiLog::new();
    let executor = executor_with(transport, &ui);

    let outcome = executor
        .execute(RequestOptions::new("/create-needy").json(json!({})).success_message("saved"))
        .await;

    assert!(outcome.success);
    assert_eq!(outcome.data, Some(json!({"data": {"x": 1}, "message": "stored"})));
    // Server-reported message wins over the caller's text.
    assert_eq!(outcome.message.as_deref(), Some("stored"));
    // The dialog still shows the caller's text.
    assert_eq!(ui.events(), vec![UiEvent::Confirm("saved".into())]);
}

#[tokio::test]
async fn network_failure_short_circuits_without_success_side_effects() {
    let ui = UiLog::new();
    let executor = executor_with(Arc::new(FailingTransport), &ui);

    let outcome = executor
        .execute(
            RequestOptions::new("/login")
                .json(json!({}))
                .success_message("welcome")
                .redirect_to("/home"),
        )
        .await;

    assert!(!outcome.success);
    let error = outcome.error.expect("network error message");
    assert!(!error.is_empty());
    assert_eq!(ui.events(), vec![UiEvent::ErrorAlert(error)]);
}

#[tokio::test]
async fn network_failure_can_be_silent() {
    let ui = UiLog::new();
    let executor = executor_with(Arc::new(FailingTransport), &ui);

    let outcome = executor
        .execute(RequestOptions::new("/registration-stats").method(Method::GET).silent())
        .await;

    assert!(!outcome.success);
    assert!(ui.events().is_empty());
}

#[tokio::test]
async fn redirect_waits_for_confirmation_dismissal() {
    let transport = StaticTransport::json(200, r#"{"needyID": 11}"#);
    let ui = UiLog::new();
    let executor = executor_with(transport, &ui);

    executor
        .execute(
            RequestOptions::new("/create-needy")
                .json(json!({}))
                .success_message("Record created")
                .redirect_to("/needy"),
        )
        .await;

    assert_eq!(
        ui.events(),
        vec![
            UiEvent::Confirm("Record created".into()),
            UiEvent::Redirect("/needy".into()),
        ]
    );
}

#[tokio::test]
async fn redirect_without_message_runs_immediately() {
    let transport = StaticTransport::json(200, "{}");
    let ui = UiLog::new();
    let executor = executor_with(transport, &ui);

    executor
        .execute(RequestOptions::new("/login").json(json!({})).redirect_to("/dashboard"))
        .await;

    assert_eq!(ui.events(), vec![UiEvent::Redirect("/dashboard".into())]);
}

#[tokio::test]
async fn identical_requests_classify_identically() {
    let transport = StaticTransport::json(200, r#"{"adminID": 7}"#);
    let ui = UiLog::new();
    let executor = executor_with(transport.clone(), &ui);

    let options = || RequestOptions::new("/get-admin/7").method(Method::GET);
    let first = executor.execute(options()).await;
    let second = executor.execute(options()).await;

    assert_eq!(first, second);
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn login_scenario_returns_the_payload_without_auth_header() {
    let transport = StaticTransport::json(200, r#"{"adminID": 7, "userRole": "Admin"}"#);
    let ui = UiLog::new();
    let executor = executor_with(transport.clone(), &ui);

    let outcome = executor
        .execute(
            RequestOptions::new("/login")
                .json(json!({"Username": "u", "Password": "p"}))
                .without_auth(),
        )
        .await;

    assert!(outcome.success);
    assert_eq!(outcome.data, Some(json!({"adminID": 7, "userRole": "Admin"})));
    assert!(outcome.message.is_none());
    assert!(transport.last_request().headers.get(AUTHORIZATION).is_none());
}

#[tokio::test]
async fn rejected_login_surfaces_the_server_message() {
    let transport = StaticTransport::json(401, r#"{"message": "invalid credentials"}"#);
    let ui = UiLog::new();
    let executor = executor_with(transport, &ui);

    let outcome = executor
        .execute(RequestOptions::new("/login").json(json!({"Username": "u", "Password": "p"})))
        .await;

    assert!(!outcome.success);
    assert_eq!(outcome.error.as_deref(), Some("invalid credentials"));
    assert!(outcome.data.is_none());
    assert_eq!(ui.events(), vec![UiEvent::ErrorAlert("invalid credentials".into())]);
}

#[tokio::test]
async fn delete_with_empty_body_confirms_exactly_once() {
    let transport = StaticTransport::empty(204);
    let ui = UiLog::new();
    let executor = executor_with(transport, &ui);

    let outcome = executor
        .execute(
            RequestOptions::new("/delete-needy/42")
                .method(Method::DELETE)
                .success_message("deleted"),
        )
        .await;

    assert!(outcome.success);
    assert!(outcome.data.is_none());
    assert_eq!(outcome.message.as_deref(), Some("deleted"));
    assert_eq!(ui.events(), vec![UiEvent::Confirm("deleted".into())]);
}

#[tokio::test]
async fn validation_detail_list_beats_the_scalar_error_field() {
    let transport = StaticTransport::json(
        422,
        r#"{"error": "validation failed", "detail": [{"msg": "name: field required"}, {"msg": "phone: invalid"}]}"#,
    );
    let ui = UiLog::new();
    let executor = executor_with(transport, &ui);

    let outcome = executor.execute(RequestOptions::new("/create-needy").json(json!({}))).await;

    assert_eq!(
        outcome.error.as_deref(),
        Some("name: field required\nphone: invalid")
    );
}

// Paths below exercise the real reqwest transport against a mock server.

#[tokio::test]
async fn multipart_bodies_get_a_boundary_content_type() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/create-needy")
        .match_header(
            "content-type",
            mockito::Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let ui = UiLog::new();
    let executor = RequestExecutorBuilder::new(
        ClientConfig::new(server.url()).with_bearer_token("test-token"),
    )
    .with_notifier(Arc::new(RecordingNotifier(ui.clone())))
    .with_navigator(Arc::new(RecordingNavigator(ui.clone())))
    .build()
    .expect("executor builds");

    let form = reqwest::multipart::Form::new()
        .text("name", "Amal")
        .text("familySize", "4");
    let outcome = executor
        .execute(RequestOptions::new("/create-needy").multipart(form))
        .await;

    assert!(outcome.success, "unexpected outcome: {outcome:?}");
}

#[tokio::test]
async fn non_json_error_bodies_are_used_as_the_message() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/list-needy")
        .with_status(500)
        .with_body("server exploded")
        .create_async()
        .await;

    let ui = UiLog::new();
    let executor = RequestExecutorBuilder::new(ClientConfig::new(server.url()))
        .with_notifier(Arc::new(RecordingNotifier(ui.clone())))
        .with_navigator(Arc::new(RecordingNavigator(ui.clone())))
        .build()
        .expect("executor builds");

    let outcome = executor
        .execute(RequestOptions::new("/list-needy").method(Method::GET))
        .await;

    assert_eq!(outcome.error.as_deref(), Some("server exploded"));
}

#[tokio::test]
async fn refused_connections_fail_without_reaching_classification() {
    let ui = UiLog::new();
    // Port 1 is never listening.
    let executor = RequestExecutorBuilder::new(ClientConfig::new("http://127.0.0.1:1"))
        .with_notifier(Arc::new(RecordingNotifier(ui.clone())))
        .with_navigator(Arc::new(RecordingNavigator(ui.clone())))
        .build()
        .expect("executor builds");

    let outcome = executor
        .execute(RequestOptions::new("/login").json(json!({})).redirect_to("/home"))
        .await;

    assert!(!outcome.success);
    assert!(outcome.error.is_some());
    let events = ui.events();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], UiEvent::ErrorAlert(_)));
}
