use std::sync::Arc;

use tracing::{info, warn};

use super::client::AppraisalGateway;
use super::domain::{normalize_domain, AppraisalResult, DomainQuery, SearchKeyword};
use super::error::AppraisalError;
use super::locale::Locale;
use super::view::AppraisalPage;
use crate::config::Credentials;

/// What a single request produced. At most one of result or error exists.
#[derive(Debug, Clone, PartialEq)]
pub enum AppraisalOutcome {
    Idle,
    Appraised {
        result: AppraisalResult,
        keyword: SearchKeyword,
    },
    Failed(AppraisalError),
}

/// Validates submissions, calls the gateway and classifies the result.
pub struct AppraisalService<G> {
    gateway: Arc<G>,
    credentials: Option<Credentials>,
    locale: Locale,
}

impl<G> AppraisalService<G>
where
    G: AppraisalGateway + 'static,
{
    pub fn new(gateway: Arc<G>, credentials: Option<Credentials>) -> Self {
        Self {
            gateway,
            credentials,
            locale: Locale::default(),
        }
    }

    /// Language the rendered pages are written in.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn initial_page(&self) -> AppraisalPage {
        AppraisalPage::initial(self.locale)
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Runs one submission end to end. Failures become part of the page.
    pub async fn submit(&self, raw_domain: &str) -> AppraisalPage {
        let domain_input = normalize_domain(raw_domain);
        let outcome = match self.appraise(raw_domain).await {
            Ok((result, keyword)) => {
                info!(
                    domain = %domain_input,
                    govalue = result.govalue,
                    "appraisal completed"
                );
                AppraisalOutcome::Appraised { result, keyword }
            }
            Err(err) => {
                warn!(domain = %domain_input, kind = err.kind(), error = %err, "appraisal failed");
                AppraisalOutcome::Failed(err)
            }
        };

        AppraisalPage {
            domain_input,
            outcome,
            locale: self.locale,
        }
    }

    async fn appraise(
        &self,
        raw_domain: &str,
    ) -> Result<(AppraisalResult, SearchKeyword), AppraisalError> {
        let domain = DomainQuery::parse(raw_domain)?;
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(AppraisalError::MissingCredentials)?;

        let result = self.gateway.appraise(credentials, &domain).await?;
        Ok((result, domain.search_keyword()))
    }
}
