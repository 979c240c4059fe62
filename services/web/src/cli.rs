use crate::appraise::{run_appraise, AppraiseArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use domain_appraiser::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Domain Appraiser",
    about = "Serve the domain appraisal page or appraise a single domain from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Appraise one domain and print the outcome
    Appraise(AppraiseArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Appraise(args) => run_appraise(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["domain-appraiser"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_appraise_with_json_flag() {
        let cli = Cli::try_parse_from(["domain-appraiser", "appraise", "Example.com", "--json"])
            .expect("parses");
        match cli.command {
            Some(Command::Appraise(args)) => {
                assert_eq!(args.domain, "Example.com");
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_serve_overrides() {
        let cli = Cli::try_parse_from(["domain-appraiser", "serve", "--port", "8080"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
