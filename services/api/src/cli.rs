use crate::demo::{run_crew_check, run_demo, run_roster_screening, CrewCheckArgs, DemoArgs, RosterArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use crew_compliance::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Crew Compliance",
    about = "Check aircrew eligibility for roster assignment from the command line or over HTTP",
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
    /// Evaluate crew members against the eligibility rules
    Crew {
        #[command(subcommand)]
        command: CrewCommand,
    },
    /// Print an approved and a rejected sample evaluation
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CrewCommand {
    /// Evaluate a single crew member from form-style field values
    Check(CrewCheckArgs),
    /// Screen every row of a roster CSV export
    Roster(RosterArgs),
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
        Command::Crew {
            command: CrewCommand::Check(args),
        } => run_crew_check(args),
        Command::Crew {
            command: CrewCommand::Roster(args),
        } => run_roster_screening(args),
        Command::Demo(args) => run_demo(args),
    }
}
