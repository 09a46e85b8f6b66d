use crate::document::args::InputArgs;
use clap::{Args, Parser, Subcommand};

// Top-level CLI parser. Without a subcommand the input is checked for duplicates.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Detect duplicate university ids in a universities-by-country document",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub check: CheckArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report ids used by more than one university record (default)
    Check(CheckArgs),
    /// Preview per-country deduplication by id, then by name
    Plan(PlanArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long, help = "Print a per-country summary table after the report")]
    pub stats: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(short, long, global = true, help = "Log debug diagnostics to stderr")]
    pub verbose: bool,

    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Only log errors"
    )]
    pub quiet: bool,
}

impl Cli {
    pub fn resolved_command(&self) -> Command {
        match &self.command {
            Some(Command::Check(args)) => Command::Check(args.clone()),
            Some(Command::Plan(args)) => Command::Plan(args.clone()),
            None => Command::Check(self.check.clone()),
        }
    }
}
