use axum::http::StatusCode;
use chrono::DateTime;
use intake::{FormPhase, HttpTransport, SubmitOutcome};
use pretty_assertions::assert_eq;
use shared_types::SubmitErrorKind;

use crate::common::{scenario_draft, scenario_session, spawn_endpoint, unreachable_url};

#[tokio::test]
async fn scenario_submission_reaches_submitted() {
    let endpoint = spawn_endpoint(StatusCode::OK).await;
    let mut session = scenario_session();
    assert!(session.can_submit());

    let outcome = session.submit(&HttpTransport::new(), &endpoint.url).await;
    assert_eq!(outcome, Some(SubmitOutcome::Submitted));
    assert_eq!(session.phase(), FormPhase::Submitted);

    let received = endpoint.received().await;
    assert_eq!(received.len(), 1);
    let body = received[0].body.as_object().unwrap();
    assert_eq!(body.len(), 7);
    assert_eq!(body["name"], "A");
    assert_eq!(body["company"], "B");
    assert_eq!(body["email"], "a@b.com");
    assert_eq!(body["phone"], "");
    assert_eq!(body["package"], "medium");
    assert_eq!(body["comments"], "");
    let stamp = body["dateTime"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(stamp).is_ok(), "not ISO-8601: {stamp}");
}

#[tokio::test]
async fn rejected_submission_returns_to_editing() {
    let endpoint = spawn_endpoint(StatusCode::BAD_GATEWAY).await;
    let mut session = scenario_session();

    let outcome = session.submit(&HttpTransport::new(), &endpoint.url).await;
    match outcome {
        Some(SubmitOutcome::Failed(err)) => assert_eq!(err.kind, SubmitErrorKind::Rejected),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(session.phase(), FormPhase::Editing);
    assert_eq!(session.draft(), &scenario_draft());
}

#[tokio::test]
async fn network_failure_keeps_draft_for_retry() {
    let url = unreachable_url().await;
    let mut session = scenario_session();

    let outcome = session.submit(&HttpTransport::new(), &url).await;
    assert!(matches!(outcome, Some(SubmitOutcome::Failed(_))));
    assert_eq!(session.phase(), FormPhase::Editing);
    assert_eq!(session.draft(), &scenario_draft());

    let endpoint = spawn_endpoint(StatusCode::OK).await;
    let retry = session.submit(&HttpTransport::new(), &endpoint.url).await;
    assert_eq!(retry, Some(SubmitOutcome::Submitted));
    assert_eq!(endpoint.received().await.len(), 1);
}

#[tokio::test]
async fn second_submit_while_in_flight_sends_nothing() {
    let endpoint = spawn_endpoint(StatusCode::OK).await;
    let mut session = scenario_session();

    let payload = session.begin_submit(chrono::Utc::now()).unwrap();
    assert_eq!(session.phase(), FormPhase::Submitting);
    assert_eq!(session.submit(&HttpTransport::new(), &endpoint.url).await, None);

    let result = intake::deliver(&HttpTransport::new(), &endpoint.url, &payload).await;
    assert_eq!(session.finish_submit(result), SubmitOutcome::Submitted);
    assert_eq!(endpoint.received().await.len(), 1);
}
