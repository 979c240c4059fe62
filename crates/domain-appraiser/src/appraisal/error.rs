/// Every way a submission can end without an appraisal. The `Display` text is
/// what the page shows the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppraisalError {
    #[error("Please enter a valid domain name.")]
    InvalidDomain,
    #[error("Configuration error: the appraisal API key and secret are not set.")]
    MissingCredentials,
    #[error("The appraisal service returned an error (status code {status}). Check that the domain is valid and the API keys are working.")]
    Upstream { status: u16 },
    #[error("Connection to the appraisal service failed: {0}")]
    Transport(String),
}

impl AppraisalError {
    /// Short machine-readable class used in logs and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidDomain => "input",
            Self::MissingCredentials => "config",
            Self::Upstream { .. } => "upstream_http",
            Self::Transport(_) => "transport",
        }
    }
}
