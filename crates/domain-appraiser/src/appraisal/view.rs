use std::fmt::{self, Write as _};

use serde::Serialize;

use super::domain::{AppraisalResult, SearchKeyword};
use super::locale::Locale;
use super::service::AppraisalOutcome;

const STYLE: &str = "\
body{font-family:'Cairo',system-ui,sans-serif;background:#f4f7f6;color:#333;margin:0;padding:20px;display:flex;justify-content:center}\
.container{width:100%;max-width:600px;padding:30px;background:#fff;border-radius:10px;box-shadow:0 4px 15px rgba(0,0,0,.1)}\
h1{color:#2c3e50;text-align:center}\
form{display:flex;margin-top:20px}\
input[type=text]{flex-grow:1;padding:12px;border:1px solid #ccc;border-radius:5px;font-size:16px;text-align:left}\
button{padding:12px 20px;margin-inline-start:8px;background:#3498db;color:#fff;border:none;border-radius:5px;font-size:16px;cursor:pointer;white-space:nowrap}\
.result{margin-top:30px;padding:20px;border:1px solid #b8d9f3;border-radius:5px;text-align:center}\
.result.error{background:#ffebee;border-color:#ffcdd2;color:#c62828}\
.price{font-size:28px;font-weight:bold;color:#2c3e50}\
.comparables{display:inline-block;margin-top:15px;padding:10px 15px;background:#27ae60;color:#fff;text-decoration:none;border-radius:5px}";

/// View model for the single appraisal page.
#[derive(Debug, Clone, PartialEq)]
pub struct AppraisalPage {
    /// Normalized input echoed back into the form.
    pub domain_input: String,
    pub outcome: AppraisalOutcome,
    pub locale: Locale,
}

impl AppraisalPage {
    pub fn initial(locale: Locale) -> Self {
        Self {
            domain_input: String::new(),
            outcome: AppraisalOutcome::Idle,
            locale,
        }
    }

    pub fn result(&self) -> Option<&AppraisalResult> {
        match &self.outcome {
            AppraisalOutcome::Appraised { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn keyword(&self) -> Option<&SearchKeyword> {
        match &self.outcome {
            AppraisalOutcome::Appraised { keyword, .. } => Some(keyword),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.outcome {
            AppraisalOutcome::Failed(err) => Some(self.locale.error_message(err)),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Flat summary used by the CLI `--json` output.
    pub fn summary(&self) -> AppraisalSummary {
        let (kind, error) = match &self.outcome {
            AppraisalOutcome::Failed(err) => {
                (Some(err.kind()), Some(self.locale.error_message(err)))
            }
            _ => (None, None),
        };

        AppraisalSummary {
            domain: self.domain_input.clone(),
            govalue: self.result().map(|result| result.govalue),
            formatted_value: self.result().map(AppraisalResult::formatted_value),
            comparables_url: self.keyword().map(SearchKeyword::namebio_url),
            error_kind: kind,
            error,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AppraisalSummary {
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub govalue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparables_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl fmt::Display for AppraisalPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let copy = self.locale.copy();
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(
            f,
            "<html lang=\"{}\" dir=\"{}\">",
            self.locale.tag(),
            self.locale.direction()
        )?;
        f.write_str("<head>\n<meta charset=\"UTF-8\">\n")?;
        f.write_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        )?;
        writeln!(f, "<title>{}</title>", Escaped(copy.title))?;
        if self.locale == Locale::Arabic {
            f.write_str("<link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">\n")?;
            f.write_str("<link href=\"https://fonts.googleapis.com/css2?family=Cairo:wght@400;700&amp;display=swap\" rel=\"stylesheet\">\n")?;
        }
        writeln!(f, "<style>{STYLE}</style>")?;
        f.write_str("</head>\n<body>\n<div class=\"container\">\n")?;
        writeln!(f, "<h1>{}</h1>", Escaped(copy.heading))?;
        f.write_str("<form method=\"post\">\n")?;
        writeln!(
            f,
            "<input type=\"text\" name=\"domain\" dir=\"ltr\" placeholder=\"example.com\" required value=\"{}\">",
            Escaped(&self.domain_input)
        )?;
        writeln!(f, "<button type=\"submit\">{}</button>", Escaped(copy.submit))?;
        f.write_str("</form>\n")?;

        match &self.outcome {
            AppraisalOutcome::Idle => {}
            AppraisalOutcome::Failed(err) => {
                let message = self.locale.error_message(err);
                writeln!(
                    f,
                    "<div class=\"result error\"><p>{}</p></div>",
                    Escaped(&message)
                )?;
            }
            AppraisalOutcome::Appraised { result, keyword } => {
                f.write_str("<div class=\"result\">\n")?;
                writeln!(f, "<h2>{}</h2>", Escaped(copy.estimate_heading))?;
                writeln!(
                    f,
                    "<p class=\"price\" dir=\"ltr\">{}</p>",
                    Escaped(&result.formatted_value())
                )?;
                writeln!(
                    f,
                    "<p>{} {}</p>",
                    Escaped(copy.domain_label),
                    Escaped(&result.domain)
                )?;
                writeln!(
                    f,
                    "<a class=\"comparables\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    Escaped(&keyword.namebio_url()),
                    Escaped(copy.comparables_link)
                )?;
                f.write_str("</div>\n")?;
            }
        }

        f.write_str("</div>\n</body>\n</html>\n")
    }
}

/// Writes its text with HTML metacharacters escaped.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                other => f.write_char(other)?,
            }
        }
        Ok(())
    }
}
