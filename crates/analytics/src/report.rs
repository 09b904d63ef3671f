use serde::{Serialize, Serializer};
use std::fmt;

/// The mean of a student's grades, or `NotAvailable` when none are recorded.
///
/// `Display` renders `N/A` for the sentinel and otherwise honours the
/// formatter's precision, defaulting to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Average {
    Value(f64),
    NotAvailable,
}

impl Average {
    pub fn value(self) -> Option<f64> {
        match self {
            Average::Value(v) => Some(v),
            Average::NotAvailable => None,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, Average::Value(_))
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Average::Value(v) => write!(f, "{:.*}", f.precision().unwrap_or(1), v),
            Average::NotAvailable => f.write_str("N/A"),
        }
    }
}

// Serialized as a number, or `null` for `NotAvailable`.
impl Serialize for Average {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Average::Value(v) => serializer.serialize_f64(*v),
            Average::NotAvailable => serializer.serialize_none(),
        }
    }
}

/// One line of the full report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentAverage {
    pub name: String,
    pub average: Average,
}

/// Statistics over the averages of students that have at least one grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportSummary {
    pub min_average: f64,
    pub max_average: f64,
    /// Mean of the per-student averages, not of the raw grades.
    pub overall_average: f64,
    pub graded_students: usize,
}

/// The output of `ReportEngine::full_report`.
///
/// `summary` is `None` when no student has a grade.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RosterReport {
    pub students: Vec<StudentAverage>,
    pub summary: Option<ReportSummary>,
}

impl RosterReport {
    /// True when the roster had no students at all.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopStudent {
    pub name: String,
    pub average: f64,
}

/// The output of `ReportEngine::top_student`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TopStudentOutcome {
    Found(TopStudent),
    EmptyRoster,
    NoGradedStudents,
}

impl TopStudentOutcome {
    pub fn found(&self) -> Option<&TopStudent> {
        match self {
            TopStudentOutcome::Found(top) => Some(top),
            _ => None,
        }
    }
}
