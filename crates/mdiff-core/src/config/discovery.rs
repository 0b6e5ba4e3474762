//! Configuration file discovery from multiple locations

use std::path::{Path, PathBuf};

/// Project config file name, looked up from the working directory upwards
pub const PROJECT_CONFIG_NAME: &str = ".mdiff.toml";

/// Configuration file locations in order of precedence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFiles {
    /// Config from CLI flag (highest precedence)
    pub cli: Option<PathBuf>,
    /// Project config (.mdiff.toml)
    pub project: Option<PathBuf>,
    /// Global XDG config
    pub global: Option<PathBuf>,
}

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover configuration files starting from the current directory
    #[must_use]
    pub fn discover(cli_path: Option<&Path>) -> ConfigFiles {
        let start = std::env::current_dir().ok();
        Self::discover_from(start.as_deref(), cli_path)
    }

    /// Discover configuration files starting from `start_dir`
    ///
    /// The CLI path is kept even when it does not exist, so loading can
    /// report it.
    #[must_use]
    pub fn discover_from(start_dir: Option<&Path>, cli_path: Option<&Path>) -> ConfigFiles {
        ConfigFiles {
            cli: cli_path.map(Path::to_path_buf),
            project: start_dir.and_then(|dir| Self::find_file(dir, PROJECT_CONFIG_NAME)),
            global: Self::find_global_config(),
        }
    }

    /// Find a config file in `start` or any of its parent directories
    fn find_file(start: &Path, name: &str) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Find global config in XDG config directory
    fn find_global_config() -> Option<PathBuf> {
        let global_config = dirs::config_dir()?.join("mdiff").join("config.toml");
        global_config.is_file().then_some(global_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_no_cli_config() {
        let files = ConfigDiscovery::discover(None);

        assert!(files.cli.is_none());
        // project and global may or may not exist depending on test environment
    }

    #[test]
    fn test_discover_cli_config() {
        let tmp = TempDir::new().unwrap();
        let cli_config = tmp.path().join("custom.toml");
        fs::write(&cli_config, "# config").unwrap();

        let files = ConfigDiscovery::discover(Some(&cli_config));

        assert_eq!(files.cli, Some(cli_config));
    }

    #[test]
    fn test_discover_project_config_in_parent() {
        let tmp = TempDir::new().unwrap();
        let project_config = tmp.path().join(PROJECT_CONFIG_NAME);
        fs::write(&project_config, "ignore = []").unwrap();

        let nested = tmp.path().join("src").join("apps");
        fs::create_dir_all(&nested).unwrap();

        let files = ConfigDiscovery::discover_from(Some(&nested), None);

        assert_eq!(files.project, Some(project_config));
    }

    #[test]
    fn test_discover_ignores_directory_named_like_config() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("project");
        fs::create_dir_all(nested.join(PROJECT_CONFIG_NAME)).unwrap();

        let files = ConfigDiscovery::discover_from(Some(&nested), None);

        assert_ne!(files.project, Some(nested.join(PROJECT_CONFIG_NAME)));
    }
}
