//! Report formatting for CLI runs.

use colored::Colorize;

use super::run::RunOutcome;
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(outcome: &RunOutcome, verbose: bool) {
    match outcome {
        RunOutcome::Initialized => {
            println!(
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
        RunOutcome::Generated {
            output_file,
            outcome,
        } => {
            let status = if outcome.written {
                "written"
            } else {
                "unchanged"
            };
            println!(
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Generated {} locale {} -> {} ({})",
                    outcome.locales.len(),
                    if outcome.locales.len() == 1 {
                        "class"
                    } else {
                        "classes"
                    },
                    output_file.display(),
                    status
                )
                .green()
            );

            if verbose {
                println!("  locales: {}", outcome.locales.join(", "));
            }

            for warning in &outcome.warnings {
                println!("{} {}", FAILURE_MARK.yellow(), warning.yellow());
            }
        }
    }
}
