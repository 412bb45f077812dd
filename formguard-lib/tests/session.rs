//! Tests for the async form session.

use std::time::Duration;

use formguard_lib::prelude::*;
use tokio_util::sync::CancellationToken;

async fn fill_valid(handle: &FormHandle) {
    let events = [
        FormEvent::Input(FieldName::FullName, "Ada Lovelace".into()),
        FormEvent::Input(FieldName::Email, "ada@example.com".into()),
        FormEvent::Input(FieldName::Password, "Abcdef1!".into()),
        FormEvent::Input(FieldName::ConfirmPassword, "Abcdef1!".into()),
        FormEvent::Input(FieldName::Age, "36".into()),
        FormEvent::Change(FieldName::Terms, true.into()),
    ];
    for event in events {
        handle.dispatch(event).await.unwrap();
    }
}

#[tokio::test(start_paused = true)]
async fn test_dispatch_applies_events_in_order() {
    let handle = FormSession::spawn(FormValidator::default(), CancellationToken::new());

    handle
        .dispatch(FormEvent::Input(FieldName::Age, "1".into()))
        .await
        .unwrap();
    handle
        .dispatch(FormEvent::Input(FieldName::Age, "14".into()))
        .await
        .unwrap();
    handle.dispatch(FormEvent::Blur(FieldName::Age)).await.unwrap();

    let view = handle.view();
    assert_eq!(view.field(FieldName::Age).value, FieldValue::from("14"));
    assert_eq!(view.field(FieldName::Age).class, VisualClass::Success);
}

#[tokio::test(start_paused = true)]
async fn test_submit_then_auto_reset() {
    let handle = FormSession::spawn(FormValidator::default(), CancellationToken::new());
    fill_valid(&handle).await;

    let outcome = handle.dispatch(FormEvent::Submit).await.unwrap();
    assert_eq!(outcome, Some(SubmitOutcome::Accepted));
    assert_eq!(handle.view().page, PageView::Success);

    tokio::time::sleep(Duration::from_secs(6)).await;

    let view = handle.view();
    assert_eq!(view.page, PageView::Form);
    assert_eq!(view.field(FieldName::FullName).value, FieldValue::from(""));
}

#[tokio::test(start_paused = true)]
async fn test_rejected_submit_reports_focus() {
    let handle = FormSession::spawn(FormValidator::default(), CancellationToken::new());

    let outcome = handle.dispatch(FormEvent::Submit).await.unwrap();
    assert_eq!(
        outcome,
        Some(SubmitOutcome::Rejected {
            focus: FieldName::FullName
        })
    );
    assert_eq!(handle.view().focused, Some(FieldName::FullName));
}

#[tokio::test(start_paused = true)]
async fn test_error_message_hidden_by_session_timer() {
    let config = FormConfig::new().error_clear_delay(Duration::from_secs(3));
    let handle = FormSession::spawn(FormValidator::new(config), CancellationToken::new());

    handle.dispatch(FormEvent::Blur(FieldName::Email)).await.unwrap();
    assert_eq!(handle.view().field(FieldName::Email).message, "Email is required");

    tokio::time::sleep(Duration::from_secs(4)).await;
    let view = handle.view();
    assert_eq!(view.field(FieldName::Email).class, VisualClass::Error);
    assert!(view.field(FieldName::Email).message.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_form_errors_are_returned() {
    let handle = FormSession::spawn(FormValidator::default(), CancellationToken::new());

    let err = handle
        .dispatch(FormEvent::Change(FieldName::Terms, "yes".into()))
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Form(FormError::ValueType { .. })));
}

#[tokio::test]
async fn test_cancel_stops_session() {
    let cancel = CancellationToken::new();
    let handle = FormSession::spawn(FormValidator::default(), cancel.clone());
    handle
        .dispatch(FormEvent::Input(FieldName::Phone, "5550100".into()))
        .await
        .unwrap();

    cancel.cancel();
    let validator = handle.shutdown().await.unwrap();
    assert_eq!(validator.values().phone, "5550100");
}
