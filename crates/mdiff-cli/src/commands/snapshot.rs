use std::path::{Path, PathBuf};

use anyhow::Context;
use mdiff::Error;
use mdiff::snapshot::SnapshotCapture;

use crate::commands::CommandOptions;
use crate::interactive::Confirmer;

pub struct Snapshot;

impl Snapshot {
    pub fn execute(
        name: &str,
        project: Option<&Path>,
        options: &CommandOptions,
    ) -> anyhow::Result<()> {
        let project_dir = match project {
            Some(dir) => dir.to_path_buf(),
            None => Self::current_dir()?,
        };

        let config = options.load_config()?;
        let store = CommandOptions::store(&config)?;
        let capture = SnapshotCapture::new(&store, &config)
            .context("Invalid ignore patterns in configuration")?;
        let confirmer = Confirmer::new(options.yes_all);

        match capture.capture(&project_dir, name, |name| confirmer.replace_snapshot(name)) {
            Ok(summary) => {
                let verb = if summary.replaced { "Replaced" } else { "Created" };
                println!(
                    "{verb} snapshot {} ({} components, {} files)",
                    summary.name, summary.components, summary.files
                );
                Ok(())
            }
            Err(Error::Cancelled) => {
                eprintln!("Snapshot cancelled by user.");
                Ok(())
            }
            Err(e) => Err(e).context("Failed to capture snapshot"),
        }
    }

    fn current_dir() -> anyhow::Result<PathBuf> {
        std::env::current_dir().context("Failed to get current directory")
    }
}
