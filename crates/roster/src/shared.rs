use crate::error::RosterError;
use crate::store::Roster;
use core_types::Grade;
use std::sync::{Arc, Mutex, MutexGuard};

/// A cloneable handle to one `Roster` for hosts that touch it from several threads.
///
/// Each mutation holds the lock across its lookup and its write, so two
/// callers adding the same name cannot both succeed.
#[derive(Debug, Clone, Default)]
pub struct SharedRoster {
    inner: Arc<Mutex<Roster>>,
}

impl SharedRoster {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Roster>, RosterError> {
        self.inner.lock().map_err(|_| RosterError::LockPoisoned)
    }

    /// Adds a student, returning the stored name.
    pub fn add_student(&self, name: &str) -> Result<String, RosterError> {
        let mut roster = self.lock()?;
        roster.add_student(name).map(|s| s.name().to_string())
    }

    pub fn append_grade(&self, name: &str, token: &str) -> Result<Grade, RosterError> {
        self.lock()?.append_grade(name, token)
    }

    pub fn clear(&self) -> Result<(), RosterError> {
        self.lock()?.clear();
        Ok(())
    }

    /// Runs `f` against a consistent view of the roster.
    pub fn with_roster<T>(&self, f: impl FnOnce(&Roster) -> T) -> Result<T, RosterError> {
        let roster = self.lock()?;
        Ok(f(&roster))
    }
}

impl From<Roster> for SharedRoster {
    fn from(roster: Roster) -> Self {
        Self {
            inner: Arc::new(Mutex::new(roster)),
        }
    }
}
