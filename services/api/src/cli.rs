use crate::commands::{run_candidate_search, run_inbox_rows, CandidateSearchArgs, InboxRowsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use recruit_ops::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Recruiting Operations",
    about = "Serve and exercise the recruiting candidate and inbox workflows",
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
    /// Filter a candidate roster export
    Candidates {
        #[command(subcommand)]
        command: CandidatesCommand,
    },
    /// Build staff inbox rows from exported chat channels
    Inbox {
        #[command(subcommand)]
        command: InboxCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CandidatesCommand {
    /// Run the candidate-facing search over a roster CSV
    Search(CandidateSearchArgs),
}

#[derive(Subcommand, Debug)]
enum InboxCommand {
    /// Map a JSON array of channels to sorted inbox rows
    Rows(InboxRowsArgs),
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
        Command::Candidates {
            command: CandidatesCommand::Search(args),
        } => run_candidate_search(args),
        Command::Inbox {
            command: InboxCommand::Rows(args),
        } => run_inbox_rows(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruit_ops::workflows::candidates::City;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["recruit-ops-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn candidate_search_collects_repeated_chips() {
        let cli = Cli::try_parse_from([
            "recruit-ops-api",
            "candidates",
            "search",
            "--csv",
            "roster.csv",
            "--city",
            "Boston",
            "--city",
            "Miami",
            "--jd-year",
            "2021",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Candidates {
                command: CandidatesCommand::Search(args),
            }) => {
                assert_eq!(args.cities, vec![City::Boston, City::Miami]);
                assert_eq!(args.jd_years, vec!["2021"]);
                assert!(args.query.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
