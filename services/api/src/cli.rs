use crate::analyze::{run_analyze, run_rubric, AnalyzeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_dispute::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Dispute Prioritizer",
    about = "Rank negative credit report entries and draft FCRA dispute letters",
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
    /// Score a JSON credit report and print ranked disputes
    Analyze(AnalyzeArgs),
    /// Print how each account entry is scored
    Rubric,
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
        Command::Analyze(args) => run_analyze(args),
        Command::Rubric => {
            run_rubric();
            Ok(())
        }
    }
}
