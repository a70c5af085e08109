use crate::types::{LogLevel, OutputFormat, SortField};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "beanshelf")]
#[command(about = "Browse the bean catalog from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $BEANSHELF_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Override the primary catalog host
    #[arg(long, global = true)]
    pub primary_url: Option<String>,

    /// Override the secondary catalog host
    #[arg(long, global = true)]
    pub secondary_url: Option<String>,

    /// Override the per-request timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive browser (default)")]
    Browse {
        /// Route to open, e.g. /gallery or /detail/<id>
        #[arg(default_value = "/")]
        route: String,
    },

    #[command(about = "Print the catalog as a filtered, sorted list")]
    List {
        /// Case-insensitive match against name, group or description
        #[arg(long)]
        search: Option<String>,

        #[arg(long, default_value = "name")]
        sort: SortField,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Print the catalog grouped by bucket")]
    Gallery {
        /// Bucket to include (repeatable; the first three are used when omitted)
        #[arg(long = "bucket")]
        buckets: Vec<String>,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Show one bean by id, as a direct link would")]
    Show {
        id: String,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Manage the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Write config.toml with the effective endpoint settings")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    #[command(about = "Print the effective configuration")]
    Show,
}
