//! Comparison report model and terminal rendering

mod model;
mod render;

pub use model::{ChangeKind, ComparisonReport, EntryPair, FileSlot};
pub use render::{ReportRenderer, format_size};
