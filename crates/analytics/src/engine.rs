use crate::report::{
    Average, ReportSummary, RosterReport, StudentAverage, TopStudent, TopStudentOutcome,
};
use core_types::Student;
use tracing::debug;

/// A stateless calculator for deriving grade statistics from a roster snapshot.
#[derive(Debug, Default)]
pub struct ReportEngine {}

impl ReportEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arithmetic mean of a student's grades.
    ///
    /// Returns `Average::NotAvailable` for a student with no grades instead of
    /// dividing by zero.
    pub fn average(&self, student: &Student) -> Average {
        let grades = student.grades();
        if grades.is_empty() {
            return Average::NotAvailable;
        }

        let sum: u64 = grades.iter().map(|g| u64::from(g.value())).sum();
        Average::Value(sum as f64 / grades.len() as f64)
    }

    /// The main entry point for the full report.
    ///
    /// # Arguments
    ///
    /// * `students` - The roster's students, in insertion order.
    ///
    /// # Returns
    ///
    /// One entry per student in the same order, plus a summary over the students
    /// that have at least one grade. The summary is `None` when there are none.
    pub fn full_report(&self, students: &[Student]) -> RosterReport {
        let mut report = RosterReport::default();

        if students.is_empty() {
            return report;
        }

        report.students = students
            .iter()
            .map(|s| StudentAverage {
                name: s.name().to_string(),
                average: self.average(s),
            })
            .collect();

        let averages: Vec<f64> = report
            .students
            .iter()
            .filter_map(|entry| entry.average.value())
            .collect();
        report.summary = self.summarize(&averages);

        debug!(
            students = report.students.len(),
            graded = averages.len(),
            "Generated full report."
        );
        report
    }

    /// Finds the student with the strictly highest average.
    ///
    /// Students without grades are skipped. Ties keep the student that was added
    /// first: the best-so-far is only replaced by a strictly greater average.
    pub fn top_student(&self, students: &[Student]) -> TopStudentOutcome {
        if students.is_empty() {
            return TopStudentOutcome::EmptyRoster;
        }

        let mut best: Option<(&Student, f64)> = None;
        for student in students {
            let Some(average) = self.average(student).value() else {
                continue;
            };
            match best {
                Some((_, best_average)) if average <= best_average => {}
                _ => best = Some((student, average)),
            }
        }

        match best {
            Some((student, average)) => TopStudentOutcome::Found(TopStudent {
                name: student.name().to_string(),
                average,
            }),
            None => TopStudentOutcome::NoGradedStudents,
        }
    }

    /// Min, max and mean over a set of averages. `None` for an empty set.
    fn summarize(&self, averages: &[f64]) -> Option<ReportSummary> {
        let (&first, rest) = averages.split_first()?;

        let (min_average, max_average) = rest
            .iter()
            .fold((first, first), |(min, max), &avg| (min.min(avg), max.max(avg)));
        let overall_average = averages.iter().sum::<f64>() / averages.len() as f64;

        Some(ReportSummary {
            min_average,
            max_average,
            overall_average,
            graded_students: averages.len(),
        })
    }
}
