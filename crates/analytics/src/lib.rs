//! # Gradebook Analytics Engine
//!
//! This crate turns a roster snapshot into averages, roster-wide statistics and
//! the top performer.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It depends only on `core-types`
//!   and reads students as a plain slice, so any store can feed it.
//! - **Stateless Calculation:** The `ReportEngine` holds no data. The same slice
//!   always yields the same report.
//! - **Absence Is Not Failure:** Students without grades and rosters without
//!   graded students produce explicit "nothing to report" values, never errors
//!   and never a fabricated zero.
//!
//! ## Public API
//!
//! - `ReportEngine`: the struct that contains the calculation logic.
//! - `Average`: a numeric mean or the `NotAvailable` sentinel.
//! - `RosterReport`, `ReportSummary`, `StudentAverage`: the full report.
//! - `TopStudentOutcome`, `TopStudent`: the result of the top-student search.

pub mod engine;
pub mod report;

pub use engine::ReportEngine;
pub use report::{
    Average, ReportSummary, RosterReport, StudentAverage, TopStudent, TopStudentOutcome,
};
