use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::appraisal::{
    appraisal_router, AppraisalError, AppraisalGateway, AppraisalResult, AppraisalService,
    DomainQuery, Locale,
};
use crate::config::Credentials;

/// Gateway returning a canned response and recording what it was asked for.
#[derive(Debug)]
pub(super) struct StubGateway {
    response: Result<AppraisalResult, AppraisalError>,
    calls: AtomicUsize,
    last_domain: Mutex<Option<String>>,
}

impl StubGateway {
    pub(super) fn appraising(govalue: f64) -> Self {
        Self::with_response(Ok(AppraisalResult {
            domain: String::new(),
            govalue,
        }))
    }

    pub(super) fn failing(err: AppraisalError) -> Self {
        Self::with_response(Err(err))
    }

    fn with_response(response: Result<AppraisalResult, AppraisalError>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            last_domain: Mutex::new(None),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(super) fn last_domain(&self) -> Option<String> {
        self.last_domain.lock().expect("stub mutex poisoned").clone()
    }
}

impl AppraisalGateway for StubGateway {
    async fn appraise(
        &self,
        _credentials: &Credentials,
        domain: &DomainQuery,
    ) -> Result<AppraisalResult, AppraisalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_domain.lock().expect("stub mutex poisoned") = Some(domain.as_str().to_string());
        self.response.clone().map(|mut result| {
            result.domain = domain.as_str().to_string();
            result
        })
    }
}

pub(super) fn credentials() -> Credentials {
    Credentials::new("test-key", "test-secret")
}

pub(super) fn service_with(
    gateway: Arc<StubGateway>,
    credentials: Option<Credentials>,
) -> Arc<AppraisalService<StubGateway>> {
    Arc::new(AppraisalService::new(gateway, credentials))
}

pub(super) fn router_with(gateway: Arc<StubGateway>) -> axum::Router {
    appraisal_router(service_with(gateway, Some(credentials())))
}

pub(super) fn localized_router_with(gateway: Arc<StubGateway>, locale: Locale) -> axum::Router {
    let service = AppraisalService::new(gateway, Some(credentials())).with_locale(locale);
    appraisal_router(Arc::new(service))
}
