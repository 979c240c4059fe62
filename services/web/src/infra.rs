use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use domain_appraiser::appraisal::{AppraisalService, HttpAppraisalClient};
use domain_appraiser::config::AppraisalConfig;
use domain_appraiser::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the service once; credentials are fixed for the process lifetime.
pub(crate) fn build_appraisal_service(
    config: &AppraisalConfig,
) -> Result<Arc<AppraisalService<HttpAppraisalClient>>, AppError> {
    let client = HttpAppraisalClient::new(config)?;
    let service = AppraisalService::new(Arc::new(client), config.credentials.clone())
        .with_locale(config.locale);
    Ok(Arc::new(service))
}
