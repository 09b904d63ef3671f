//! # Gradebook Roster Store
//!
//! The session-owned collection of students and their grades.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** Depends only on `core-types`. It knows nothing about
//!   consoles, files or reports.
//! - **Owned State:** A `Roster` is an ordinary value. Create as many as you
//!   need; nothing is process-wide.
//! - **Validate Before Insert:** Names and grades are checked before any write,
//!   so a failed call never leaves partial state behind.
//!
//! ## Public API
//!
//! - `Roster`: insertion-ordered students with case-insensitive unique names.
//! - `SharedRoster`: a cloneable, mutex-guarded handle for concurrent hosts.
//! - `RosterError` / `ErrorKind`: the failure taxonomy of every mutation.

pub mod error;
pub mod shared;
pub mod store;

pub use error::{ErrorKind, RosterError};
pub use shared::SharedRoster;
pub use store::Roster;
