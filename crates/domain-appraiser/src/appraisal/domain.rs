use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::AppraisalError;

/// Characters left as-is in the search keyword; everything else is escaped.
const KEYWORD_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Raw form body posted by the appraisal page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppraisalForm {
    #[serde(default)]
    pub domain: String,
}

/// A trimmed, lower-cased domain name. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DomainQuery(String);

impl DomainQuery {
    /// Normalizes the raw input. Blank or dot-only input is an
    /// [`AppraisalError::InvalidDomain`]; `.` and `..` would otherwise be
    /// resolved away when pushed as a URL path segment.
    pub fn parse(raw: &str) -> Result<Self, AppraisalError> {
        let normalized = normalize_domain(raw);
        if normalized.chars().all(|c| c == '.') {
            return Err(AppraisalError::InvalidDomain);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The label before the first dot with hyphens turned into spaces.
    pub fn search_keyword(&self) -> SearchKeyword {
        let label = self.0.split('.').next().unwrap_or_default();
        SearchKeyword(label.replace('-', " "))
    }
}

pub fn normalize_domain(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Search term derived from a domain's primary label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchKeyword(String);

impl SearchKeyword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn percent_encoded(&self) -> String {
        utf8_percent_encode(&self.0, KEYWORD_SAFE).to_string()
    }

    pub fn namebio_url(&self) -> String {
        format!("https://namebio.com/?s={}", self.percent_encoded())
    }
}

/// Successful appraisal as reported by the upstream API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppraisalResult {
    pub domain: String,
    pub govalue: f64,
}

impl AppraisalResult {
    /// Validates the upstream body field by field instead of trusting its shape.
    pub fn from_json(body: &Value) -> Result<Self, AppraisalError> {
        let domain = body
            .get("domain")
            .and_then(Value::as_str)
            .ok_or_else(|| AppraisalError::Transport("response is missing `domain`".into()))?;

        let govalue = body
            .get("govalue")
            .and_then(Value::as_f64)
            .ok_or_else(|| AppraisalError::Transport("response is missing `govalue`".into()))?;

        if !govalue.is_finite() || govalue < 0.0 {
            return Err(AppraisalError::Transport(format!(
                "response carried an invalid `govalue` ({govalue})"
            )));
        }

        Ok(Self {
            domain: domain.to_string(),
            govalue,
        })
    }

    /// Whole-dollar amount with thousands separators, e.g. `$12,345`.
    pub fn formatted_value(&self) -> String {
        format_currency(self.govalue)
    }
}

pub fn format_currency(value: f64) -> String {
    let rounded = if value.is_finite() && value > 0.0 {
        value.round()
    } else {
        0.0
    };
    let digits = format!("{rounded:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}
