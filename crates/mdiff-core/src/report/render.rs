//! Terminal rendering of comparison reports and snapshot listings

use std::fmt::Write;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use unicode_width::UnicodeWidthStr;

use super::model::{ChangeKind, ComparisonReport, EntryPair, FileSlot};
use crate::snapshot::SnapshotSummary;

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

const COMPONENT_TITLE: &str = "COMPONENT";
const TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Box-drawing characters of one horizontal rule
struct Rule {
    left: char,
    delimiter: char,
    right: char,
}

const TOP: Rule = Rule {
    left: '┌',
    delimiter: '┬',
    right: '┐',
};
const MIDDLE: Rule = Rule {
    left: '├',
    delimiter: '┼',
    right: '┤',
};
const BOTTOM: Rule = Rule {
    left: '└',
    delimiter: '┴',
    right: '┘',
};

/// Renders reports as colored tables
#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer {
    color: bool,
}

impl ReportRenderer {
    /// Create a renderer, with or without ANSI colors
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render a comparison report
    ///
    /// An empty report renders as a single "are equal" line.
    #[must_use]
    pub fn render(&self, report: &ComparisonReport) -> String {
        if report.is_empty() {
            return format!(
                "Snapshots {} and {} are equal!\n",
                self.paint(GREEN, report.left_label()),
                self.paint(GREEN, report.right_label()),
            );
        }

        let widths = Self::column_widths(report);
        let mut output = String::new();

        self.push_rule(&mut output, &widths, &TOP);
        self.push_row(
            &mut output,
            &widths,
            [
                (COMPONENT_TITLE, Some(BOLD)),
                (report.left_label().to_uppercase().as_str(), Some(BOLD)),
                (report.right_label().to_uppercase().as_str(), Some(BOLD)),
            ],
        );

        for (component, entries) in report.iter() {
            self.push_rule(&mut output, &widths, &MIDDLE);
            for (index, entry) in entries.iter().enumerate() {
                let component = if index == 0 { component } else { "" };
                let (left, right) = Self::entry_colors(entry);
                self.push_row(
                    &mut output,
                    &widths,
                    [
                        (component, None),
                        (entry.left().to_string().as_str(), Some(left)),
                        (entry.right().to_string().as_str(), Some(right)),
                    ],
                );
            }
        }

        self.push_rule(&mut output, &widths, &BOTTOM);
        output
    }

    /// Number of components that differ, as a single line
    #[must_use]
    pub fn render_count(report: &ComparisonReport) -> String {
        format!("{}\n", report.component_count())
    }

    /// Render a listing of stored snapshots
    #[must_use]
    pub fn render_summaries(&self, summaries: &[SnapshotSummary]) -> String {
        if summaries.is_empty() {
            return format!("{}\n", self.paint(RED, "Snapshots are not found"));
        }

        let name_width = summaries
            .iter()
            .map(|s| s.name.width())
            .max()
            .unwrap_or(0)
            .max("NAME".len());

        let mut output = String::new();
        let header = format!(
            "{:<name_width$}  {:>10}  {:>6}  {:<16}  SIZE",
            "NAME", "COMPONENTS", "FILES", "CREATED"
        );
        let _ = writeln!(output, "{}", self.paint(GREEN, &header));

        for summary in summaries {
            let padding = name_width - summary.name.width();
            let _ = writeln!(
                output,
                "{}{}  {:>10}  {:>6}  {:<16}  {}",
                summary.name,
                " ".repeat(padding),
                summary.components,
                summary.files,
                summary.created.map_or_else(|| "-".to_string(), format_time),
                format_size(summary.size_bytes),
            );
        }

        output
    }

    /// Widest cell of each column plus one space of padding
    fn column_widths(report: &ComparisonReport) -> [usize; 3] {
        let mut widths = [
            COMPONENT_TITLE.width(),
            report.left_label().to_uppercase().width(),
            report.right_label().to_uppercase().width(),
        ];

        for (component, entries) in report.iter() {
            widths[0] = widths[0].max(component.width());
            for entry in entries {
                widths[1] = widths[1].max(slot_width(entry.left()));
                widths[2] = widths[2].max(slot_width(entry.right()));
            }
        }

        widths.map(|w| w + 1)
    }

    fn entry_colors(entry: &EntryPair) -> (&'static str, &'static str) {
        match entry.kind() {
            ChangeKind::Changed => (YELLOW, YELLOW),
            ChangeKind::LeftOnly => (GREEN, RED),
            ChangeKind::RightOnly => (RED, GREEN),
        }
    }

    fn push_rule(&self, output: &mut String, widths: &[usize; 3], rule: &Rule) {
        let mut line = String::new();
        line.push(rule.left);
        for (i, width) in widths.iter().enumerate() {
            line.push_str(&"─".repeat(width + 1));
            line.push(if i + 1 == widths.len() {
                rule.right
            } else {
                rule.delimiter
            });
        }

        let _ = writeln!(output, "{}", self.paint(DIM, &line));
    }

    fn push_row(
        &self,
        output: &mut String,
        widths: &[usize; 3],
        cells: [(&str, Option<&str>); 3],
    ) {
        let border = self.paint(DIM, "│");
        output.push_str(&border);

        for ((value, style), width) in cells.iter().zip(widths) {
            let padding = width.saturating_sub(value.width());
            let value = match style {
                Some(style) => self.paint(style, value),
                None => (*value).to_string(),
            };
            let _ = write!(output, " {value}{}{border}", " ".repeat(padding));
        }

        output.push('\n');
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color && !text.is_empty() {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

fn slot_width(slot: &FileSlot) -> usize {
    slot.name().map_or(FileSlot::Absent.to_string().width(), UnicodeWidthStr::width)
}

fn format_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(TIME_FORMAT).to_string()
}

/// Human readable snapshot size
#[must_use]
pub fn format_size(size: u64) -> String {
    if size > 1000 {
        format!("{} Kb", size / 1000)
    } else {
        format!("{size} bytes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ComparisonReport {
        let mut report = ComparisonReport::new("dev", "master");
        report.insert(
            "users",
            vec![
                EntryPair::left_only("0002_add_email.py"),
                EntryPair::right_only("0003_rename.py"),
            ],
        );
        report.insert("orders", vec![EntryPair::changed("0001_initial.py")]);
        report
    }

    #[test]
    fn test_render_equal_snapshots() {
        let report = ComparisonReport::new("dev", "master");
        let output = ReportRenderer::new(false).render(&report);

        assert_eq!(output, "Snapshots dev and master are equal!\n");
    }

    #[test]
    fn test_render_plain_table() {
        let output = ReportRenderer::new(false).render(&sample_report());
        let lines: Vec<_> = output.lines().collect();

        let expected = vec![
            "┌───────────┬───────────────────┬─────────────────┐",
            "│ COMPONENT │ DEV               │ MASTER          │",
            "├───────────┼───────────────────┼─────────────────┤",
            "│ orders    │ 0001_initial.py   │ 0001_initial.py │",
            "├───────────┼───────────────────┼─────────────────┤",
            "│ users     │ 0002_add_email.py │ ---             │",
            "│           │ ---               │ 0003_rename.py  │",
            "└───────────┴───────────────────┴─────────────────┘",
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_render_colors() {
        let output = ReportRenderer::new(true).render(&sample_report());

        assert!(output.contains(&format!("{YELLOW}0001_initial.py{RESET}")));
        assert!(output.contains(&format!("{GREEN}0002_add_email.py{RESET}")));
        assert!(output.contains(&format!("{RED}---{RESET}")));
        assert!(output.contains(&format!("{BOLD}COMPONENT{RESET}")));
    }

    #[test]
    fn test_render_count() {
        assert_eq!(ReportRenderer::render_count(&sample_report()), "2\n");
        assert_eq!(
            ReportRenderer::render_count(&ComparisonReport::new("a", "b")),
            "0\n"
        );
    }

    #[test]
    fn test_render_summaries() {
        let summaries = vec![SnapshotSummary {
            name: "dev".to_string(),
            components: 3,
            files: 12,
            size_bytes: 4_500,
            created: None,
        }];

        let output = ReportRenderer::new(false).render_summaries(&summaries);

        assert!(output.starts_with("NAME"));
        let row = output.lines().nth(1).unwrap();
        assert!(row.starts_with("dev "));
        assert!(row.contains("12"));
        assert!(row.ends_with("4 Kb"));
    }

    #[test]
    fn test_render_no_summaries() {
        let output = ReportRenderer::new(false).render_summaries(&[]);
        assert_eq!(output, "Snapshots are not found\n");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(1000), "1000 bytes");
        assert_eq!(format_size(1001), "1 Kb");
        assert_eq!(format_size(25_600), "25 Kb");
    }
}
