use anyhow::Result;
use colored::Colorize;

use crate::engine::{Outcome, RunReport};

/// Prints a per-file account followed by a one-line summary.
pub fn print_report(report: &RunReport, verbose: bool) {
    for file in &report.files {
        match &file.outcome {
            Outcome::Updated => {
                println!("{} {}", "updated".green().bold(), file.path.display());
            }
            Outcome::Unchanged => {
                if verbose {
                    println!("{} {}", "unchanged".dimmed(), file.path.display());
                }
            }
            Outcome::Failed { message } => {
                println!(
                    "{} {} ({message})",
                    "failed".red().bold(),
                    file.path.display()
                );
            }
        }
    }

    let summary = format!(
        "{} updated, {} unchanged, {} failed in {}ms",
        report.updated, report.unchanged, report.failed, report.duration_ms
    );
    if report.has_failures() {
        println!("{}", summary.red());
    } else {
        println!("{}", summary.green());
    }
}

/// Prints the report as JSON for machine consumption.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(report: &RunReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
