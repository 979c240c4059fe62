//! Domain appraisal lookups: input normalization, the outbound GoDaddy client,
//! outcome classification, and the HTML page built from the outcome.

pub mod client;
pub mod domain;
pub mod error;
pub mod locale;
pub mod router;
pub mod service;
pub mod view;

#[cfg(test)]
mod tests;

pub use client::{AppraisalGateway, ClientBuildError, HttpAppraisalClient};
pub use domain::{
    format_currency, normalize_domain, AppraisalForm, AppraisalResult, DomainQuery, SearchKeyword,
};
pub use error::AppraisalError;
pub use locale::Locale;
pub use router::appraisal_router;
pub use service::{AppraisalOutcome, AppraisalService};
pub use view::{AppraisalPage, AppraisalSummary};
