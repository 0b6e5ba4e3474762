//! Snapshot storage, capture and comparison
//!
//! A snapshot lives at `<snapshots_dir>/<name>` and holds one directory per
//! component, each containing that component's migration files.

mod capture;
mod differ;
mod store;


pub use capture::{CaptureSummary, SnapshotCapture};
pub use differ::SnapshotDiffer;
pub use store::{RemoveOutcome, SnapshotStore, SnapshotSummary};
