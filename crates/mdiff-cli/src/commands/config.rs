use anyhow::Context;
use mdiff::config::ConfigDiscovery;

use crate::commands::CommandOptions;

pub struct Config;

impl Config {
    pub fn execute(options: &CommandOptions) -> anyhow::Result<()> {
        if options.no_config {
            println!("Config files: disabled (--no-config)");
        } else {
            let files = ConfigDiscovery::discover(options.config_path);
            println!("Config files:");
            for (label, path) in [
                ("cli", &files.cli),
                ("project", &files.project),
                ("global", &files.global),
            ] {
                match path {
                    Some(path) => println!("  {label}: {}", path.display()),
                    None => println!("  {label}: (none)"),
                }
            }
        }

        let config = options.load_config()?;
        let snapshots_dir = config.resolve_snapshots_dir()?;

        println!();
        println!("snapshots_dir = {}", snapshots_dir.display());
        println!("comparison = \"{}\"", config.comparison_mode());
        println!("migrations_dir = {}", config.migrations_dir_name());
        println!("skip_files = {}", config.skipped_files().join(", "));

        let rendered =
            toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
        if !rendered.trim().is_empty() {
            println!();
            println!("# merged configuration");
            print!("{rendered}");
        }

        Ok(())
    }
}
