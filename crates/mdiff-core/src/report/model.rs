//! Comparison report data model

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// One side of an entry pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileSlot {
    /// The file exists on this side
    Present(String),
    /// No file on this side
    Absent,
}

impl FileSlot {
    /// File name when present
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Present(name) => Some(name),
            Self::Absent => None,
        }
    }

    /// Whether this side holds a file
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

impl fmt::Display for FileSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(name) => f.write_str(name),
            Self::Absent => f.write_str("---"),
        }
    }
}

/// What an entry pair says about a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Only in the left snapshot
    LeftOnly,
    /// Only in the right snapshot
    RightOnly,
    /// In both snapshots with different content
    Changed,
}

/// A single difference between two snapshots within one component
///
/// At least one side is always [`FileSlot::Present`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryPair {
    left: FileSlot,
    right: FileSlot,
}

impl EntryPair {
    /// File that exists in the left snapshot only
    #[must_use]
    pub fn left_only(name: impl Into<String>) -> Self {
        Self {
            left: FileSlot::Present(name.into()),
            right: FileSlot::Absent,
        }
    }

    /// File that exists in the right snapshot only
    #[must_use]
    pub fn right_only(name: impl Into<String>) -> Self {
        Self {
            left: FileSlot::Absent,
            right: FileSlot::Present(name.into()),
        }
    }

    /// File present in both snapshots with differing content
    #[must_use]
    pub fn changed(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            left: FileSlot::Present(name.clone()),
            right: FileSlot::Present(name),
        }
    }

    /// Left side
    #[must_use]
    pub const fn left(&self) -> &FileSlot {
        &self.left
    }

    /// Right side
    #[must_use]
    pub const fn right(&self) -> &FileSlot {
        &self.right
    }

    /// The left name when present, otherwise the right name
    #[must_use]
    pub fn present_name(&self) -> &str {
        match &self.left {
            FileSlot::Present(name) => name,
            FileSlot::Absent => self.right.name().unwrap_or_default(),
        }
    }

    /// Classify the entry
    #[must_use]
    pub const fn kind(&self) -> ChangeKind {
        match (self.left.is_present(), self.right.is_present()) {
            (true, true) => ChangeKind::Changed,
            (true, false) => ChangeKind::LeftOnly,
            (false, _) => ChangeKind::RightOnly,
        }
    }

    /// Whether only one snapshot has the file
    #[must_use]
    pub const fn is_one_sided(&self) -> bool {
        !matches!(self.kind(), ChangeKind::Changed)
    }

    /// The same entry seen from the other snapshot
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            left: self.right.clone(),
            right: self.left.clone(),
        }
    }

    /// Ordering used inside a component
    pub(crate) fn cmp_by_present_name(&self, other: &Self) -> Ordering {
        self.present_name().cmp(other.present_name())
    }
}

/// Differences between two snapshots, grouped by component
///
/// Components iterate in lexicographic order and only components with at
/// least one entry are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    left_label: String,
    right_label: String,
    components: BTreeMap<String, Vec<EntryPair>>,
}

impl ComparisonReport {
    /// Empty report between two labelled snapshots
    #[must_use]
    pub fn new(left_label: impl Into<String>, right_label: impl Into<String>) -> Self {
        Self {
            left_label: left_label.into(),
            right_label: right_label.into(),
            components: BTreeMap::new(),
        }
    }

    /// Attach the entries of a component
    ///
    /// Entries are sorted by present name. An empty list leaves the report
    /// untouched.
    pub fn insert(&mut self, component: impl Into<String>, mut entries: Vec<EntryPair>) {
        if entries.is_empty() {
            return;
        }

        entries.sort_by(EntryPair::cmp_by_present_name);
        self.components.insert(component.into(), entries);
    }

    /// Name of the left snapshot
    #[must_use]
    pub fn left_label(&self) -> &str {
        &self.left_label
    }

    /// Name of the right snapshot
    #[must_use]
    pub fn right_label(&self) -> &str {
        &self.right_label
    }

    /// True when the snapshots are equal
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of components with differences
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Number of entries across all components
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.components.values().map(Vec::len).sum()
    }

    /// Entries of one component
    #[must_use]
    pub fn get(&self, component: &str) -> Option<&[EntryPair]> {
        self.components.get(component).map(Vec::as_slice)
    }

    /// Components in sorted order with their sorted entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[EntryPair])> {
        self.components
            .iter()
            .map(|(component, entries)| (component.as_str(), entries.as_slice()))
    }

    /// The same report with left and right exchanged
    #[must_use]
    pub fn swapped(&self) -> Self {
        let mut report = Self::new(self.right_label.clone(), self.left_label.clone());
        for (component, entries) in &self.components {
            report.insert(
                component.clone(),
                entries.iter().map(EntryPair::swapped).collect(),
            );
        }
        report
    }
}
