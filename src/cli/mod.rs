use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
use run::RunOutcome;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let outcome = run::run(args)?;
    report::print(&outcome, verbose);

    Ok(status_of(&outcome))
}

fn status_of(outcome: &RunOutcome) -> ExitStatus {
    match outcome {
        RunOutcome::Generated { outcome, .. } if !outcome.warnings.is_empty() => {
            ExitStatus::Failure
        }
        _ => ExitStatus::Success,
    }
}
