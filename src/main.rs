//! Readme walker CLI
//!
//! Prints the lesson, waits for 'learn', then runs the learner's tests.

use std::io;

use clap::Parser;
use colored::Colorize;
use readme_walker::{common::logging, Lesson, Result, SystemHost, Walker};

#[derive(Parser)]
#[command(name = "readme", about = "Walk through the lesson readme, then run the tests")]
#[command(version, long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    logging::init_cli();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            std::process::exit(1);
        }
    }
}

/// Walk the built-in lesson and return the test runner's exit code
fn run() -> Result<i32> {
    let lesson = Lesson::builtin()?;
    let host = SystemHost::new(&lesson.commands);

    let report = Walker::new(lesson, io::stdin().lock(), io::stdout().lock(), host).run()?;

    tracing::debug!(
        gating_reads = report.gating_reads,
        reminders = report.reminders,
        "Lesson complete"
    );
    Ok(report.test_run.process_exit_code())
}
