use crate::demo::{
    run_analyze, run_demo, run_quiz, run_share, run_stats, AnalyzeArgs, DemoArgs, QuizArgs,
    ShareArgs, StatsArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use marketer_dna::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Marketer DNA",
    about = "Run the marketer DNA diagnosis service or take the quiz from the command line",
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
    /// Take the adaptive quiz interactively or from a scripted choice list
    Quiz(QuizArgs),
    /// Analyze a JSON file of recorded answers
    Analyze(AnalyzeArgs),
    /// Rebuild and analyze the answers behind a share code
    Share(ShareArgs),
    /// Summarize a CSV export of historical submissions
    Stats(StatsArgs),
    /// Simulate a population of respondents and print aggregate insights
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Preload historical submissions from a CSV export
    #[arg(long)]
    pub(crate) seed_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quiz(args) => run_quiz(args),
        Command::Analyze(args) => run_analyze(args),
        Command::Share(args) => run_share(args),
        Command::Stats(args) => run_stats(args),
        Command::Demo(args) => run_demo(args),
    }
}
