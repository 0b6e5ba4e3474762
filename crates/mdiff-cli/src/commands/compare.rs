use anyhow::{Context, bail};
use mdiff::comparison::ComparisonMode;
use mdiff::report::ReportRenderer;
use mdiff::snapshot::SnapshotDiffer;

use crate::commands::CommandOptions;

pub struct Compare;

impl Compare {
    pub fn execute(
        names: &[String],
        number: bool,
        shallow: bool,
        options: &CommandOptions,
    ) -> anyhow::Result<()> {
        let [left, right] = names else {
            bail!("only 2 snapshots can be compared, got {}", names.len());
        };

        let config = options.load_config()?;
        let store = CommandOptions::store(&config)?;
        let mode = if shallow {
            ComparisonMode::Shallow
        } else {
            config.comparison_mode()
        };

        let report = SnapshotDiffer::new(store)
            .with_mode(mode)
            .diff(left, right)
            .with_context(|| format!("Failed to compare snapshots {left} and {right}"))?;

        if number {
            print!("{}", ReportRenderer::render_count(&report));
        } else {
            print!("{}", options.renderer().render(&report));
        }

        Ok(())
    }
}
