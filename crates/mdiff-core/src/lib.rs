//! # mdiff
//!
//! Core library for snapshotting and comparing migration directories.
//!
//! A snapshot is a directory of component directories (one per application)
//! holding migration files. This library captures snapshots from a project
//! tree, stores them under a snapshots directory and compares two of them
//! into a [`report::ComparisonReport`] grouped by component.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

/// Filesystem access used by comparisons
pub mod fs;

/// Directory comparison and content hashing
pub mod comparison;

/// Snapshot storage, capture and diffing
pub mod snapshot;

/// Comparison report model and rendering
pub mod report;

/// Configuration file parsing and management
pub mod config;

pub use error::{Error, Result};
