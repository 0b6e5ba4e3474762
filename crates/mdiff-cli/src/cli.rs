use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Migration Snapshot Comparison Tool
///
/// Snapshot the migration directories of a project and compare snapshots taken on different branches
#[derive(Parser, Debug)]
#[command(name = "mdiff")]
#[command(about, long_about = None, version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Accept all confirmations without prompting
    #[arg(long, global = true)]
    pub yes_all: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override snapshots directory
    #[arg(long, global = true, value_name = "PATH", env = "MDIFF_SNAPSHOTS_DIR")]
    pub snapshots_dir: Option<PathBuf>,

    /// Use specific config file
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Capture the migration files of a project as a named snapshot
    Snapshot {
        /// Snapshot name, usually the branch name
        name: String,

        /// Project directory to scan (default: current directory)
        #[arg(short, long, value_name = "DIR")]
        project: Option<PathBuf>,
    },

    /// Compare two snapshots component by component
    Compare {
        /// Snapshots to compare
        #[arg(required = true, num_args = 2.., value_name = "SNAPSHOT")]
        names: Vec<String>,

        /// Print only the number of differing components
        #[arg(short, long)]
        number: bool,

        /// Trust matching size and modification time instead of hashing
        #[arg(long)]
        shallow: bool,
    },

    /// List stored snapshots
    List,

    /// Remove snapshots
    #[command(name = "rm")]
    Remove {
        /// Snapshots to remove
        #[arg(required_unless_present = "all", conflicts_with = "all", value_name = "SNAPSHOT")]
        names: Vec<String>,

        /// Remove every stored snapshot
        #[arg(long)]
        all: bool,
    },

    /// Show the effective configuration
    Config,
}
