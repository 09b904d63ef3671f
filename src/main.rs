use analytics::ReportEngine;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use configuration::{Config, LogLevel, load_config};
use roster::Roster;
use std::io;
use std::path::PathBuf;

mod logging;
mod render;
mod session;

use session::Session;

/// The main entry point for the Gradebook application.
fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    let _log_guard = logging::init_tracing(&config.logging, cli.log_level)?;

    // Execute the appropriate command
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let stdin = io::stdin();
            let mut session = Session::new(stdin.lock(), io::stdout(), &config);
            session.run().context("console session failed")?;
        }
        Commands::Report(args) => handle_report(args, &config)?,
        Commands::Top(args) => handle_top(args, &config)?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Track students and their grades, then report averages and the top performer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults to `gradebook.toml` if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides both `RUST_LOG` and the configured log level.
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the menu-driven session (the default).
    Interactive,
    /// Print the full report for the students given on the command line.
    Report(RosterArgs),
    /// Print the student with the highest average.
    Top(RosterArgs),
}

#[derive(Args)]
struct RosterArgs {
    /// A student and their grades, e.g. `Alice=80,90` or `Bob=` / `Bob` for none.
    /// Repeat for each student; order is preserved.
    #[arg(long = "student", value_name = "NAME=GRADES", value_parser = parse_student_arg)]
    students: Vec<StudentArg>,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct StudentArg {
    name: String,
    grades: Vec<String>,
}

fn parse_student_arg(raw: &str) -> Result<StudentArg, String> {
    let (name, grades) = raw.split_once('=').unwrap_or((raw, ""));
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing student name in '{raw}'"));
    }

    let grades = grades
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect();

    Ok(StudentArg {
        name: name.to_string(),
        grades,
    })
}

// ==============================================================================
// One-shot Command Logic
// ==============================================================================

/// Builds an ephemeral roster, failing on the first rejected name or grade.
fn build_roster(students: &[StudentArg]) -> anyhow::Result<Roster> {
    let mut roster = Roster::new();
    for student in students {
        roster.add_student(&student.name)?;
        for grade in &student.grades {
            roster
                .append_grade(&student.name, grade)
                .with_context(|| format!("invalid grade for {}", student.name))?;
        }
    }
    Ok(roster)
}

fn handle_report(args: RosterArgs, config: &Config) -> anyhow::Result<()> {
    let roster = build_roster(&args.students)?;
    let report = ReportEngine::new().full_report(roster.students());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.is_empty() {
        println!("{}", render::NO_STUDENTS);
        return Ok(());
    }

    let precision = config.display.precision;
    println!("{}", render::report_table(&report, precision));
    if let Some(summary) = &report.summary {
        for line in render::summary_lines(summary, precision) {
            println!("{line}");
        }
    }
    Ok(())
}

fn handle_top(args: RosterArgs, config: &Config) -> anyhow::Result<()> {
    let roster = build_roster(&args.students)?;
    let outcome = ReportEngine::new().top_student(roster.students());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!(
            "{}",
            render::top_student_line(&outcome, config.display.precision)
        );
    }
    Ok(())
}
