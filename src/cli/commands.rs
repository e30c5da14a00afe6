//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagmatch")]
#[command(about = "Lifestyle tag compatibility reports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new pair of profiles
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List selectable tags from the catalog
    Tags {
        /// Restrict to one category (sleep, activity, food, wellness, lifestyle, entertainment)
        category: Option<String>,

        /// Show each tag's criteria
        #[arg(short, long)]
        describe: bool,
    },

    /// Add tags to a person's selection
    Select {
        /// Person to edit: 1 or 2
        person: String,

        /// Tags to add (quote multi-word tags)
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Remove tags from a person's selection
    Remove {
        /// Person to edit: 1 or 2
        person: String,

        /// Tags to remove
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Show current selections
    Show {
        /// Person to show: 1 or 2 (default: both)
        person: Option<String>,
    },

    /// Compute the compatibility report
    Report {
        /// Restrict the breakdown to one category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Compute a single person's score report
    Solo {
        /// Person to score: 1 or 2
        person: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set (person1, person2, created)
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
