pub mod check;
pub mod dedupe;
pub mod stats;

pub use stats::{CountryStat, DuplicateStats};

use crate::args::Command;
use crate::error::DupError;
use crate::visuals;

pub fn run(command: &Command) -> Result<(), DupError> {
    match command {
        Command::Check(args) => {
            let mut stdout = std::io::stdout().lock();
            let stats = check::check_file(args, &mut stdout)?;
            drop(stdout);
            if args.stats {
                visuals::print_stats(&stats);
            }
        }
        Command::Plan(args) => {
            let plans = dedupe::plan_file(args)?;
            visuals::print_plan(&plans);
        }
    }
    Ok(())
}
