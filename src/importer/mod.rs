//! Offline batch importers, run as CLI subcommands.
//!
//! Both importers are idempotent: rows are matched by natural key and
//! existing matches are left untouched, so re-running the same source never
//! duplicates data.

pub mod competition;
pub mod lab_fixture;

/// Outcome summary of an import run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    /// Rows that produced a new record.
    pub created: u32,
    /// Rows that matched an existing record and were left as-is.
    pub matched: u32,
    /// Rows rejected before any lookup (missing required fields).
    pub skipped: u32,
}
