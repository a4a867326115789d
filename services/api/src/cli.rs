use crate::demo::{run_demo, run_recommend, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use policy_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Policy Recommendation Service",
    about = "Run and exercise the personalized insurance policy recommendation service",
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
    /// Request a recommendation for one profile from the command line
    Recommend(RecommendArgs),
    /// Run the pipeline end to end against a canned offline completion gateway
    Demo,
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
        Command::Recommend(args) => run_recommend(args).await,
        Command::Demo => run_demo().await,
    }
}
