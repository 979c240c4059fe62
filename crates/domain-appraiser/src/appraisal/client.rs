use std::future::Future;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::domain::{AppraisalResult, DomainQuery};
use super::error::AppraisalError;
use crate::config::{AppraisalConfig, Credentials};

/// Outbound seam so the service can be exercised without a network.
pub trait AppraisalGateway: Send + Sync {
    fn appraise(
        &self,
        credentials: &Credentials,
        domain: &DomainQuery,
    ) -> impl Future<Output = Result<AppraisalResult, AppraisalError>> + Send;
}

#[derive(Debug, thiserror::Error)]
#[error("failed to build appraisal HTTP client: {0}")]
pub struct ClientBuildError(#[from] reqwest::Error);

/// `reqwest` client for `GET {base}/v1/appraisal/{domain}`.
#[derive(Debug, Clone)]
pub struct HttpAppraisalClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpAppraisalClient {
    pub fn new(config: &AppraisalConfig) -> Result<Self, ClientBuildError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// The domain is pushed as a single path segment, so `/`, `?` and `#`
    /// arrive percent-encoded instead of reshaping the request path.
    pub fn endpoint(&self, domain: &DomainQuery) -> Result<Url, AppraisalError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppraisalError::Transport("appraisal API URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(["v1", "appraisal", domain.as_str()]);
        Ok(url)
    }
}

impl AppraisalGateway for HttpAppraisalClient {
    async fn appraise(
        &self,
        credentials: &Credentials,
        domain: &DomainQuery,
    ) -> Result<AppraisalResult, AppraisalError> {
        let url = self.endpoint(domain)?;
        debug!(domain = domain.as_str(), %url, "requesting appraisal");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, credentials.authorization_header())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(describe_transport)?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(AppraisalError::Upstream {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await.map_err(describe_transport)?;
        AppraisalResult::from_json(&body)
    }
}

fn describe_transport(err: reqwest::Error) -> AppraisalError {
    if err.is_timeout() {
        AppraisalError::Transport("the request timed out".into())
    } else if err.is_decode() {
        AppraisalError::Transport(format!("response body was not valid JSON ({err})"))
    } else {
        AppraisalError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client(base: &str) -> HttpAppraisalClient {
        let config = AppraisalConfig {
            base_url: Url::parse(base).expect("valid base"),
            timeout: Duration::from_secs(1),
            credentials: None,
            locale: Default::default(),
        };
        HttpAppraisalClient::new(&config).expect("client builds")
    }

    #[test]
    fn endpoint_appends_appraisal_path() {
        let domain = DomainQuery::parse("example.com").expect("valid domain");
        let url = client("https://api.example.test")
            .endpoint(&domain)
            .expect("endpoint builds");
        assert_eq!(url.as_str(), "https://api.example.test/v1/appraisal/example.com");
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let domain = DomainQuery::parse("example.com").expect("valid domain");
        let url = client("http://127.0.0.1:8080/proxy/")
            .endpoint(&domain)
            .expect("endpoint builds");
        assert_eq!(url.path(), "/proxy/v1/appraisal/example.com");
    }

    #[test]
    fn endpoint_encodes_path_unsafe_characters() {
        let domain = DomainQuery::parse("evil.com/../../admin?x=1#frag").expect("non-empty");
        let url = client("https://api.example.test")
            .endpoint(&domain)
            .expect("endpoint builds");
        assert_eq!(
            url.path(),
            "/v1/appraisal/evil.com%2F..%2F..%2Fadmin%3Fx=1%23frag"
        );
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn dot_segments_never_reach_the_collection_path() {
        for raw in [".", ".."] {
            assert!(matches!(
                DomainQuery::parse(raw),
                Err(AppraisalError::InvalidDomain)
            ));
        }

        let domain = DomainQuery::parse("%2e%2e").expect("non-empty");
        let url = client("https://api.example.test")
            .endpoint(&domain)
            .expect("endpoint builds");
        assert_eq!(url.path(), "/v1/appraisal/%252e%252e");
    }
}
