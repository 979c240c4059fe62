use clap::Args;
use domain_appraiser::appraisal::{AppraisalOutcome, AppraisalPage};
use domain_appraiser::config::AppConfig;
use domain_appraiser::error::AppError;

use crate::infra::build_appraisal_service;

#[derive(Args, Debug)]
pub(crate) struct AppraiseArgs {
    /// Domain name to appraise (normalized the same way as the web form)
    pub(crate) domain: String,
    /// Print the outcome as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_appraise(args: AppraiseArgs) -> Result<(), AppError> {
    let AppraiseArgs { domain, json } = args;

    let config = AppConfig::load()?;
    let service = build_appraisal_service(&config.appraisal)?;
    let page = service.submit(&domain).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&page.summary())?);
    } else {
        render_appraisal(&page);
    }

    match page.outcome {
        AppraisalOutcome::Failed(err) => Err(AppError::Appraisal(err)),
        AppraisalOutcome::Idle | AppraisalOutcome::Appraised { .. } => Ok(()),
    }
}

fn render_appraisal(page: &AppraisalPage) {
    println!("Domain: {}", page.domain_input);
    match &page.outcome {
        AppraisalOutcome::Idle => {}
        AppraisalOutcome::Appraised { result, keyword } => {
            println!("Estimated value: {}", result.formatted_value());
            println!("Comparable sales: {}", keyword.namebio_url());
        }
        AppraisalOutcome::Failed(err) => {
            println!("Appraisal unavailable: {err}");
        }
    }
}
