//! Common types and utilities for command execution

use std::path::{Path, PathBuf};

use anyhow::Context;
use mdiff::config::{Config, ConfigManager};
use mdiff::report::ReportRenderer;
use mdiff::snapshot::SnapshotStore;

/// Execution options shared by every command
pub struct CommandOptions<'a> {
    /// Auto-approve confirmations without prompting
    pub yes_all: bool,
    /// Emit ANSI colors
    pub color: bool,
    /// Snapshots directory given on the command line or environment
    pub snapshots_dir: Option<&'a Path>,
    /// Path to custom config file
    pub config_path: Option<&'a Path>,
    /// Skip loading all config files
    pub no_config: bool,
}

impl<'a> CommandOptions<'a> {
    /// Create new command options
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub const fn new(
        yes_all: bool,
        color: bool,
        snapshots_dir: Option<&'a Path>,
        config_path: Option<&'a Path>,
        no_config: bool,
    ) -> Self {
        Self {
            yes_all,
            color,
            snapshots_dir,
            config_path,
            no_config,
        }
    }

    /// Load configuration from files, with command line overrides applied
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = if self.no_config {
            Config::default()
        } else {
            ConfigManager::load(self.config_path).context("Failed to load configuration")?
        };

        if let Some(dir) = self.snapshots_dir {
            config.snapshots_dir = Some(dir.to_path_buf());
        }

        Ok(config)
    }

    /// Snapshot store selected by `config`
    pub fn store(config: &Config) -> anyhow::Result<SnapshotStore> {
        let root: PathBuf = config
            .resolve_snapshots_dir()
            .context("Failed to locate snapshots directory")?;
        tracing::debug!(root = %root.display(), "using snapshots directory");
        Ok(SnapshotStore::new(root))
    }

    /// Renderer honoring the color setting
    #[must_use]
    pub const fn renderer(&self) -> ReportRenderer {
        ReportRenderer::new(self.color)
    }
}
