mod appraise;
mod cli;
mod infra;
mod routes;
mod server;

use domain_appraiser::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
