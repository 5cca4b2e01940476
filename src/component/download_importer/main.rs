//! 下載匯入主模組
//!
//! 掃描下載目錄，將可對應到賽事的資料夾重新命名並移動到媒體庫

use super::prompter::ImportPrompter;
use super::resolver::{Resolution, resolve_directory_name};
use crate::component::event_indexer::CatalogIndex;
use crate::config::UserSettings;
use crate::tools::{
    DiagnosticSink, LogSink, ensure_directory_exists, is_directory_empty, list_files,
    scan_download_dirs, validate_directory_exists,
};
use anyhow::{Context, Result, bail};
use console::style;
use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 匯入結果統計
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// 掃描到的資料夾數量
    pub scanned: usize,
    pub imported: usize,
    pub skipped: usize,
    /// 刪除的空資料夾數量
    pub deleted_empty: usize,
    pub errors: usize,
}

/// 單一資料夾的處理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported(PathBuf),
    Skipped,
    DeletedEmpty,
}

/// 下載匯入器
pub struct DownloadImporter {
    settings: UserSettings,
    shutdown_signal: Arc<AtomicBool>,
    prompter: Option<Box<dyn ImportPrompter>>,
    sink: Box<dyn DiagnosticSink>,
}

impl DownloadImporter {
    /// 建立非互動模式的匯入器
    #[must_use]
    pub fn new(settings: UserSettings, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            settings,
            shutdown_signal,
            prompter: None,
            sink: Box::new(LogSink),
        }
    }

    /// 互動模式：刪除、覆蓋與移動前都會詢問
    #[must_use]
    pub fn with_prompter(mut self, prompter: Box<dyn ImportPrompter>) -> Self {
        self.prompter = Some(prompter);
        self
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.prompter.is_some()
    }

    /// 匯入並顯示結果摘要
    pub fn run(&self, catalog: &CatalogIndex) -> Result<ImportSummary> {
        println!("{}", style("=== Import Downloads ===").cyan().bold());
        println!(
            "{}",
            style(format!("Scanning {} ...", self.settings.source_dir.display())).dim()
        );

        let summary = self.import_downloads(catalog)?;
        self.display_summary(&summary);
        Ok(summary)
    }

    /// 匯入所有符合前綴的下載資料夾
    ///
    /// 單一資料夾的錯誤只會記錄並計數，不會中斷整個流程
    pub fn import_downloads(&self, catalog: &CatalogIndex) -> Result<ImportSummary> {
        if catalog.is_empty() {
            bail!("No events found in the index.");
        }
        validate_directory_exists(&self.settings.source_dir)?;

        let candidates = scan_download_dirs(&self.settings.source_dir, |name| {
            self.settings.matches_prefix(name)
        });

        let mut summary = ImportSummary {
            scanned: candidates.len(),
            ..ImportSummary::default()
        };

        for source_path in &candidates {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("Received shutdown signal, stopping import");
                break;
            }

            match self.process_directory(source_path, catalog) {
                Ok(ImportOutcome::Imported(_)) => summary.imported += 1,
                Ok(ImportOutcome::DeletedEmpty) => summary.deleted_empty += 1,
                Ok(ImportOutcome::Skipped) => summary.skipped += 1,
                Err(e) => {
                    error!("Failed to import {}: {e:#}", source_path.display());
                    summary.errors += 1;
                }
            }
        }

        info!(
            "Import finished - imported: {}, skipped: {}, deleted empty: {}, errors: {}",
            summary.imported, summary.skipped, summary.deleted_empty, summary.errors
        );

        Ok(summary)
    }

    /// 處理單一下載資料夾
    pub fn process_directory(
        &self,
        source_path: &Path,
        catalog: &CatalogIndex,
    ) -> Result<ImportOutcome> {
        if is_directory_empty(source_path)? {
            return self.handle_empty_source_dir(source_path);
        }

        let Some(dir_name) = source_path.file_name().and_then(|name| name.to_str()) else {
            warn!("Skipping {} because its name is not valid UTF-8", source_path.display());
            return Ok(ImportOutcome::Skipped);
        };

        let display_path = source_path.display().to_string();
        let resolution = resolve_directory_name(
            dir_name,
            self.settings.delimiter,
            catalog,
            &display_path,
            self.sink.as_ref(),
        );

        let (normalized, event_title) = match resolution {
            Resolution::Episodic => {
                info!("Skipping {display_path} because it looks like a TV show");
                return Ok(ImportOutcome::Skipped);
            }
            Resolution::NoMatch { .. } => {
                info!("Skipping {display_path} because no match found.");
                return Ok(ImportOutcome::Skipped);
            }
            Resolution::Matched {
                normalized,
                event_title,
            } => (normalized, event_title),
        };

        let dest_name = self
            .settings
            .destination_name(&event_title, normalized.edition);
        let dest_path = self.settings.dest_dir.join(dest_name);
        info!("Found UFC directory: {display_path}");
        if let Some(record) = catalog.get(&event_title) {
            info!(
                "Matched event {event_title} (id {}, date {})",
                record.id().unwrap_or("unknown"),
                record.date().unwrap_or("unknown")
            );
        }
        info!("Destination path: {}", dest_path.display());

        let replace_existing = dest_path.exists();
        if replace_existing && !self.should_overwrite(&dest_path)? {
            return Ok(ImportOutcome::Skipped);
        }

        if !self.confirm(&format!("Move {display_path} to {}?", dest_path.display()))? {
            return Ok(ImportOutcome::Skipped);
        }

        // 所有確認都完成後才刪除既有目標
        if replace_existing {
            remove_existing_destination(&dest_path)?;
        }
        ensure_directory_exists(&self.settings.dest_dir)?;
        fs::rename(source_path, &dest_path).with_context(|| {
            format!(
                "Failed to move {} to {}",
                source_path.display(),
                dest_path.display()
            )
        })?;
        info!("Moved {display_path} to {}", dest_path.display());

        Ok(ImportOutcome::Imported(dest_path))
    }

    /// 互動模式詢問使用者，非互動模式一律同意
    fn confirm(&self, question: &str) -> Result<bool> {
        match &self.prompter {
            Some(prompter) => prompter.confirm(question),
            None => Ok(true),
        }
    }

    fn handle_empty_source_dir(&self, source_path: &Path) -> Result<ImportOutcome> {
        let delete = match &self.prompter {
            Some(prompter) => {
                prompter.confirm(&format!("{} is empty. Delete?", source_path.display()))?
            }
            None => self.settings.auto_delete_empty_source_dir,
        };

        if !delete {
            info!("Skipping empty directory {}", source_path.display());
            return Ok(ImportOutcome::Skipped);
        }

        fs::remove_dir(source_path)
            .with_context(|| format!("Failed to delete {}", source_path.display()))?;
        info!("Deleted empty directory: {}", source_path.display());
        Ok(ImportOutcome::DeletedEmpty)
    }

    /// 目標已存在時列出內容並決定是否覆蓋，只做決定不刪除
    fn should_overwrite(&self, dest_path: &Path) -> Result<bool> {
        info!("Destination path {} already exists", dest_path.display());
        info!("Contents:");
        for file in list_files(dest_path) {
            info!("  {}", file.display());
        }

        let overwrite = self.settings.auto_overwrite_destination
            || match &self.prompter {
                Some(prompter) => prompter.confirm("Overwrite?")?,
                None => false,
            };

        if !overwrite {
            info!("Skipping because {} already exists", dest_path.display());
        }
        Ok(overwrite)
    }

    fn display_summary(&self, summary: &ImportSummary) {
        println!();
        println!("{}", style("=== Import Summary ===").cyan().bold());
        println!("  Scanned:  {}", summary.scanned);
        println!("  Imported: {}", style(summary.imported).green());
        if summary.skipped > 0 {
            println!("  Skipped:  {}", style(summary.skipped).yellow());
        }
        if summary.deleted_empty > 0 {
            println!("  Deleted empty: {}", style(summary.deleted_empty).yellow());
        }
        if summary.errors > 0 {
            println!("  Failed:   {}", style(summary.errors).red());
        }
    }
}

fn remove_existing_destination(dest_path: &Path) -> Result<()> {
    info!("Deleting {}", dest_path.display());
    let removed = if dest_path.is_dir() {
        fs::remove_dir_all(dest_path)
    } else {
        fs::remove_file(dest_path)
    };
    removed.with_context(|| format!("Failed to delete {}", dest_path.display()))
}
