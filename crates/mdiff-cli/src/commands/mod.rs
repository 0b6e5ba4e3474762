pub mod common;
pub mod compare;
pub mod config;
pub mod list;
pub mod remove;
pub mod snapshot;

pub use common::CommandOptions;
pub use compare::Compare;
pub use config::Config;
pub use list::List;
pub use remove::Remove;
pub use snapshot::Snapshot;
