use crate::error::RosterError;
use core_types::{Grade, Student};
use tracing::{debug, warn};

/// Holds every student tracked during one session, in insertion order.
/// Its sole responsibility is keeping names unique and grades valid; it does
/// not compute anything about the grades it stores.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Creates an empty `Roster`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every student, returning the roster to its freshly built state.
    pub fn clear(&mut self) {
        self.students.clear();
    }

    /// Adds a student with no grades.
    ///
    /// Surrounding whitespace is trimmed and the remaining casing is stored as typed.
    /// A name that matches an existing student case-insensitively is rejected
    /// and the roster is left untouched.
    pub fn add_student(&mut self, name: &str) -> Result<&Student, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            warn!("Rejected student with an empty name.");
            return Err(RosterError::EmptyName);
        }
        if self.find_student(name).is_some() {
            warn!(student = name, "Rejected duplicate student.");
            return Err(RosterError::Duplicate(name.to_string()));
        }

        self.students.push(Student::new(name));
        debug!(student = name, total = self.students.len(), "Added student.");
        Ok(&self.students[self.students.len() - 1])
    }

    /// Looks a student up by name, ignoring case.
    pub fn find_student(&self, name: &str) -> Option<&Student> {
        let name = name.trim();
        self.students.iter().find(|s| s.matches_name(name))
    }

    /// Parses `token` as a grade and appends it to the named student.
    ///
    /// The student must exist first. A token that is not a whole number, or a
    /// number outside `0..=100`, is rejected without touching the student.
    pub fn append_grade(&mut self, name: &str, token: &str) -> Result<Grade, RosterError> {
        let name = name.trim();
        let student = self
            .students
            .iter_mut()
            .find(|s| s.matches_name(name))
            .ok_or_else(|| RosterError::NotFound(name.to_string()))?;

        let grade = Grade::parse(token).map_err(|e| {
            warn!(student = student.name(), token, error = %e, "Rejected grade.");
            RosterError::from(e)
        })?;

        student.record(grade);
        debug!(student = student.name(), grade = grade.value(), "Recorded grade.");
        Ok(grade)
    }

    /// All students in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
