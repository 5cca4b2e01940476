use crate::config::UserSettings;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "ufc_library_importer",
    version,
    about = "Index UFC events and import downloads into a media library"
)]
pub struct Cli {
    /// Log level (DEBUG, INFO, WARNING, ERROR, CRITICAL)
    #[arg(long, default_value = "INFO", global = true)]
    pub loglevel: String,

    /// Settings file (defaults to ./settings.json)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Download this season's events and cache them
    IndexEvents {
        /// Force re-indexing of events even if they are already up-to-date
        #[arg(long)]
        force: bool,

        /// Freshness level for the cached events, in days
        #[arg(long = "freshness-days", alias = "freshness_days")]
        freshness_days: Option<u32>,
    },
    /// Match downloaded directories against the cached events and move them
    ImportDownloads {
        /// Ask before deleting, overwriting or moving anything
        #[arg(long)]
        interactive: bool,

        /// Delete empty download directories
        #[arg(long)]
        auto_delete_empty: bool,

        /// Replace destinations that already exist
        #[arg(long)]
        auto_overwrite: bool,
    },
}

impl Command {
    /// 將命令列參數套用到設定（只影響本次執行）
    pub fn apply_overrides(&self, settings: &mut UserSettings) {
        match self {
            Self::IndexEvents { freshness_days, .. } => {
                if let Some(days) = freshness_days {
                    settings.freshness_days = *days;
                }
            }
            Self::ImportDownloads {
                auto_delete_empty,
                auto_overwrite,
                ..
            } => {
                settings.auto_delete_empty_source_dir |= *auto_delete_empty;
                settings.auto_overwrite_destination |= *auto_overwrite;
            }
        }
    }
}
