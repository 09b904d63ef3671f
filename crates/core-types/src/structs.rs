use crate::error::CoreError;
use serde::Serialize;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// A single recorded grade. Only values in `0..=100` can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Grade(u8);

impl Grade {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Validates a numeric grade against the closed `[0, 100]` range.
    pub fn new(value: i64) -> Result<Self, CoreError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CoreError::OutOfRange(value.to_string()))
        }
    }

    /// Parses a free-form token typed by a user.
    ///
    /// Non-numeric tokens are `InvalidInput`. Integers that do not fit the
    /// machine type are still integers, so they are reported as `OutOfRange`.
    pub fn parse(token: &str) -> Result<Self, CoreError> {
        let token = token.trim();
        match token.parse::<i64>() {
            Ok(value) => Self::new(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(CoreError::OutOfRange(token.to_string()))
                }
                _ => Err(CoreError::InvalidInput(token.to_string())),
            },
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl FromStr for Grade {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked student and the grades recorded for them, in entry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    name: String,
    grades: Vec<Grade>,
}

impl Student {
    /// Creates a student with no grades. The name is stored as given.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grades: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn has_grades(&self) -> bool {
        !self.grades.is_empty()
    }

    /// Appends an already validated grade.
    pub fn record(&mut self, grade: Grade) {
        self.grades.push(grade);
    }

    /// Case-insensitive name comparison. Stored casing is untouched.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
