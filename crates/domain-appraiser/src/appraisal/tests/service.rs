use std::sync::Arc;

use super::common::*;
use crate::appraisal::{AppraisalError, AppraisalOutcome, AppraisalService, Locale};

#[tokio::test]
async fn successful_appraisal_carries_result_and_keyword() {
    let gateway = Arc::new(StubGateway::appraising(48_250.0));
    let service = service_with(gateway.clone(), Some(credentials()));

    let page = service.submit("  Foo-Bar-Baz.COM ").await;

    assert_eq!(page.domain_input, "foo-bar-baz.com");
    assert_eq!(gateway.last_domain().as_deref(), Some("foo-bar-baz.com"));
    let result = page.result().expect("appraisal present");
    assert_eq!(result.formatted_value(), "$48,250");
    let keyword = page.keyword().expect("keyword present");
    assert_eq!(keyword.as_str(), "foo bar baz");
    assert!(page.error_message().is_none());
}

#[tokio::test]
async fn blank_domain_is_an_input_error_even_without_credentials() {
    for credentials in [Some(credentials()), None] {
        let gateway = Arc::new(StubGateway::appraising(1.0));
        let service = service_with(gateway.clone(), credentials);

        let page = service.submit(" \t ").await;

        assert_eq!(page.outcome, AppraisalOutcome::Failed(AppraisalError::InvalidDomain));
        assert_eq!(page.domain_input, "");
        assert_eq!(gateway.calls(), 0);
    }
}

#[tokio::test]
async fn missing_credentials_skip_the_outbound_call() {
    let gateway = Arc::new(StubGateway::appraising(1.0));
    let service = service_with(gateway.clone(), None);

    let page = service.submit("Example.COM").await;

    assert_eq!(
        page.outcome,
        AppraisalOutcome::Failed(AppraisalError::MissingCredentials)
    );
    assert_eq!(page.domain_input, "example.com");
    assert_eq!(gateway.calls(), 0);
    assert!(!service.has_credentials());
}

#[tokio::test]
async fn upstream_failures_keep_the_echoed_domain() {
    let gateway = Arc::new(StubGateway::failing(AppraisalError::Upstream { status: 404 }));
    let service = service_with(gateway.clone(), Some(credentials()));

    let page = service.submit(" Example.COM ").await;

    assert_eq!(page.domain_input, "example.com");
    assert!(page.result().is_none());
    let message = page.error_message().expect("error present");
    assert!(message.contains("404"));
    assert_eq!(gateway.calls(), 1);
}

#[tokio::test]
async fn transport_failures_are_reported_not_raised() {
    let gateway = Arc::new(StubGateway::failing(AppraisalError::Transport(
        "connection refused".into(),
    )));
    let service = service_with(gateway, Some(credentials()));

    let page = service.submit("example.com").await;

    let message = page.error_message().expect("error present");
    assert!(message.contains("connection refused"));
    assert!(page.keyword().is_none());
}

#[tokio::test]
async fn locale_flows_into_every_page() {
    let gateway = Arc::new(StubGateway::appraising(1.0));
    let service = AppraisalService::new(gateway, None).with_locale(Locale::Arabic);

    assert_eq!(service.locale(), Locale::Arabic);
    assert_eq!(service.initial_page().locale, Locale::Arabic);
    let page = service.submit("example.com").await;
    assert_eq!(page.locale, Locale::Arabic);
    assert_eq!(
        page.error_message(),
        Some(Locale::Arabic.error_message(&AppraisalError::MissingCredentials))
    );
}
