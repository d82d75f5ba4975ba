use std::sync::Arc;
use std::time::Duration;

use landing_engine::{
    DispatchSettings, Dispatcher, EngineConfig, EngineEvent, EngineHandle, FailureKind, FieldMap,
    FormMeta, ReqwestDispatcher, SubmissionPayload, SubmissionRequest,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payload() -> SubmissionPayload {
    SubmissionPayload {
        source: "karbon-site".to_string(),
        page: "/skraning".to_string(),
        submitted_at: "2025-06-01T12:00:00+00:00".to_string(),
        form_meta: FormMeta {
            id: "form-simple".to_string(),
            name: "Skráning".to_string(),
        },
        data: FieldMap::from_pairs([
            ("name".to_string(), "Jon".to_string()),
            ("email".to_string(), "jon@example.com".to_string()),
            ("interest".to_string(), "Diet".to_string()),
            ("interest".to_string(), "Training".to_string()),
        ]),
    }
}

#[tokio::test]
async fn dispatch_posts_json_and_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/catch/1"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = ReqwestDispatcher::new(DispatchSettings::default());
    let endpoint = format!("{}/catch/1", server.uri());

    dispatcher
        .dispatch(&endpoint, &payload())
        .await
        .expect("dispatch ok");

    let requests = server.received_requests().await.expect("recorded requests");
    let body: serde_json::Value =
        serde_json::from_slice(&requests[0].body).expect("json body");
    assert_eq!(body["source"], "karbon-site");
    assert_eq!(body["formMeta"]["id"], "form-simple");
    assert_eq!(body["data"]["name"], "Jon");
    assert_eq!(body["data"]["email"], "jon@example.com");
    assert_eq!(
        body["data"]["interest"],
        serde_json::json!(["Diet", "Training"])
    );
}

#[tokio::test]
async fn server_rejection_still_counts_as_success() {
    // The response is unreadable by design, so a 500 is indistinguishable
    // from acceptance.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/catch/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dispatcher = ReqwestDispatcher::new(DispatchSettings::default());
    let endpoint = format!("{}/catch/1", server.uri());

    dispatcher
        .dispatch(&endpoint, &payload())
        .await
        .expect("opaque success");
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(250)))
        .mount(&server)
        .await;

    let settings = DispatchSettings {
        request_timeout: Duration::from_millis(50),
        ..DispatchSettings::default()
    };
    let dispatcher = ReqwestDispatcher::new(settings);
    let endpoint = format!("{}/slow", server.uri());

    let err = dispatcher.dispatch(&endpoint, &payload()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    let settings = DispatchSettings {
        connect_timeout: Duration::from_millis(200),
        request_timeout: Duration::from_millis(400),
    };
    let dispatcher = ReqwestDispatcher::new(settings);

    let err = dispatcher
        .dispatch("http://127.0.0.1:9/catch", &payload())
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::Network | FailureKind::Timeout
    ));
}

#[tokio::test]
async fn malformed_endpoint_is_rejected_before_sending() {
    let dispatcher = ReqwestDispatcher::new(DispatchSettings::default());

    let err = dispatcher
        .dispatch("not a url", &payload())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidEndpoint);
}

#[tokio::test]
async fn engine_stamps_the_clock_and_reports_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/catch/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = EngineConfig::new(
        DispatchSettings::default(),
        Arc::new(|| "2025-06-01T12:00:00+00:00".to_string()),
    );
    let engine = EngineHandle::new(config);
    engine.submit(SubmissionRequest {
        form_id: 7,
        endpoint: format!("{}/catch/1", server.uri()),
        meta: FormMeta {
            id: "form-simple".to_string(),
            name: "Skráning".to_string(),
        },
        source: "karbon-site".to_string(),
        page: "/skraning".to_string(),
        fields: FieldMap::from_pairs([("name".to_string(), "Jon".to_string())]),
    });

    // The engine owns its runtime on a separate thread; poll its event side.
    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    let event = loop {
        if let Some(event) = engine.try_recv() {
            break event;
        }
        assert!(std::time::Instant::now() < deadline, "no engine event");
        tokio::time::sleep(Duration::from_millis(20)).await;
    };

    let EngineEvent::DispatchCompleted { form_id, result } = event;
    assert_eq!(form_id, 7);
    assert!(result.is_ok());

    let requests = server.received_requests().await.expect("recorded requests");
    let body: serde_json::Value =
        serde_json::from_slice(&requests[0].body).expect("json body");
    assert_eq!(body["submittedAt"], "2025-06-01T12:00:00+00:00");
}
