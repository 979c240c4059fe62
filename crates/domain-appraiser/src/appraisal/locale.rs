use super::error::AppraisalError;

/// Language of the rendered page and its user-facing error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Arabic,
}

impl Locale {
    /// Accepts `en`/`ar` language tags (region suffixes ignored); anything
    /// else falls back to English.
    pub fn from_tag(value: &str) -> Self {
        let tag = value.trim().to_ascii_lowercase();
        let language = tag.split(['-', '_']).next().unwrap_or_default();
        match language {
            "ar" | "arabic" => Self::Arabic,
            _ => Self::English,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }

    pub fn direction(self) -> &'static str {
        match self {
            Self::English => "ltr",
            Self::Arabic => "rtl",
        }
    }

    pub(crate) fn copy(self) -> &'static PageCopy {
        match self {
            Self::English => &ENGLISH,
            Self::Arabic => &ARABIC,
        }
    }

    /// The message shown on the page for `err`. English reuses the error's
    /// `Display` text, which is also what gets logged.
    pub fn error_message(self, err: &AppraisalError) -> String {
        match self {
            Self::English => err.to_string(),
            Self::Arabic => match err {
                AppraisalError::InvalidDomain => "الرجاء إدخال اسم نطاق صحيح.".to_string(),
                AppraisalError::MissingCredentials => {
                    "خطأ في الإعداد: مفاتيح GoDaddy API غير موجودة.".to_string()
                }
                AppraisalError::Upstream { status } => format!(
                    "حدث خطأ من GoDaddy (Code: {status}). تأكد من أن النطاق صحيح وأن مفاتيح API تعمل."
                ),
                AppraisalError::Transport(detail) => format!("فشل الاتصال بالخادم: {detail}"),
            },
        }
    }
}

pub(crate) struct PageCopy {
    pub(crate) title: &'static str,
    pub(crate) heading: &'static str,
    pub(crate) submit: &'static str,
    pub(crate) estimate_heading: &'static str,
    pub(crate) domain_label: &'static str,
    pub(crate) comparables_link: &'static str,
}

static ENGLISH: PageCopy = PageCopy {
    title: "Domain Appraisal Tool",
    heading: "Domain Price Appraisal",
    submit: "Appraise",
    estimate_heading: "Estimated value",
    domain_label: "Domain:",
    comparables_link: "Find comparable sales on NameBio",
};

static ARABIC: PageCopy = PageCopy {
    title: "أداة تقييم الدومينات",
    heading: "أداة تقييم أسعار الدومينات",
    submit: "قيّم الآن",
    estimate_heading: "التقييم التقديري من GoDaddy",
    domain_label: "النطاق:",
    comparables_link: "ابحث عن مبيعات مشابهة في NameBio",
};
