use analytics::{ReportSummary, RosterReport, StudentAverage, TopStudentOutcome};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use roster::{ErrorKind, RosterError};

pub const NO_STUDENTS: &str = "No students available!";
pub const NO_GRADED_STUDENTS: &str = "No students with grades available!";

pub fn student_line(entry: &StudentAverage, precision: usize) -> String {
    format!(
        "{}'s average grade is {:.*}.",
        entry.name, precision, entry.average
    )
}

/// The `---` separator followed by max, min and overall averages.
pub fn summary_lines(summary: &ReportSummary, precision: usize) -> Vec<String> {
    vec![
        "---".to_string(),
        format!("Max Average: {:.*}", precision, summary.max_average),
        format!("Min Average: {:.*}", precision, summary.min_average),
        format!("Overall Average: {:.*}", precision, summary.overall_average),
    ]
}

/// The full report as console text, header included.
pub fn report_lines(report: &RosterReport, precision: usize) -> Vec<String> {
    if report.is_empty() {
        return vec![NO_STUDENTS.to_string()];
    }

    let mut lines = vec![String::new(), "--- Student Report ---".to_string()];
    lines.extend(report.students.iter().map(|e| student_line(e, precision)));
    if let Some(summary) = &report.summary {
        lines.extend(summary_lines(summary, precision));
    }
    lines
}

pub fn top_student_line(outcome: &TopStudentOutcome, precision: usize) -> String {
    match outcome {
        TopStudentOutcome::Found(top) => format!(
            "The student with the highest average is {} with a grade of {:.*}.",
            top.name, precision, top.average
        ),
        TopStudentOutcome::EmptyRoster => NO_STUDENTS.to_string(),
        TopStudentOutcome::NoGradedStudents => NO_GRADED_STUDENTS.to_string(),
    }
}

/// Per-student averages as a table. The summary is rendered separately.
pub fn report_table(report: &RosterReport, precision: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Student", "Average"]);

    for entry in &report.students {
        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(format!("{:.*}", precision, entry.average))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// The console wording for a rejected roster operation.
pub fn error_message(err: &RosterError) -> String {
    match err.kind() {
        ErrorKind::OutOfRange => "Grade must be between 0 and 100!".to_string(),
        ErrorKind::InvalidInput => "Invalid input. Please enter a number.".to_string(),
        _ => err.to_string(),
    }
}
