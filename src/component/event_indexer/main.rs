//! 賽事索引主模組
//!
//! 檢查快取是否過期，需要時從遠端下載當季賽事並寫入快取

use super::cache::{is_fresh, read_index, write_events};
use super::catalog::CatalogIndex;
use super::catalog_source::{CatalogSource, SportsDbSource};
use crate::config::UserSettings;
use anyhow::Result;
use chrono::Datelike;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::PathBuf;
use std::time::Duration;

/// 目前的賽季（本地時間的年份）
#[must_use]
pub fn current_season() -> i32 {
    chrono::Local::now().year()
}

/// 更新結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexUpdate {
    /// 快取仍在有效期限內，未連線
    Fresh { cache_file: PathBuf },
    Refreshed { cache_file: PathBuf, events: usize },
}

/// 賽事索引器
pub struct EventIndexer {
    settings: UserSettings,
    source: Box<dyn CatalogSource>,
    season: i32,
}

impl EventIndexer {
    /// 使用設定中的 TheSportsDB 來源
    pub fn new(settings: UserSettings) -> Result<Self> {
        let source = SportsDbSource::new(settings.league_url_template())?;
        Ok(Self::with_source(settings, Box::new(source)))
    }

    #[must_use]
    pub fn with_source(settings: UserSettings, source: Box<dyn CatalogSource>) -> Self {
        Self {
            settings,
            source,
            season: current_season(),
        }
    }

    #[must_use]
    pub fn with_season(mut self, season: i32) -> Self {
        self.season = season;
        self
    }

    #[must_use]
    pub const fn season(&self) -> i32 {
        self.season
    }

    #[must_use]
    pub fn cache_file(&self) -> PathBuf {
        self.settings.cache_file(self.season)
    }

    /// 更新賽事快取
    ///
    /// # Arguments
    /// * `force` - 忽略快取有效期限
    /// * `freshness_days` - 快取有效天數
    pub fn update_index(&self, force: bool, freshness_days: u32) -> Result<IndexUpdate> {
        let cache_file = self.cache_file();

        if !force && is_fresh(&cache_file, freshness_days) {
            info!(
                "{} has been modified within the last {freshness_days} days. Skipping update.",
                cache_file.display()
            );
            return Ok(IndexUpdate::Fresh { cache_file });
        }

        let events = self.source.fetch_season(self.season)?;
        write_events(&cache_file, &events)?;
        info!(
            "Cached {} events for season {} in {}",
            events.len(),
            self.season,
            cache_file.display()
        );

        Ok(IndexUpdate::Refreshed {
            cache_file,
            events: events.len(),
        })
    }

    /// 讀取目前賽季的賽事目錄
    #[must_use]
    pub fn read_index(&self) -> CatalogIndex {
        read_index(&self.cache_file())
    }

    /// 顯示進度並更新快取
    pub fn run(&self, force: bool, freshness_days: u32) -> Result<IndexUpdate> {
        println!("{}", style("=== Index Events ===").cyan().bold());
        println!(
            "{}",
            style(format!(
                "Indexing events with force={force} and freshness_days={freshness_days}..."
            ))
            .dim()
        );

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("Invalid progress bar template"),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(format!("Updating season {}...", self.season));

        let result = self.update_index(force, freshness_days);
        spinner.finish_and_clear();

        match &result {
            Ok(IndexUpdate::Fresh { cache_file }) => println!(
                "{} {}",
                style("Cache is up to date:").green(),
                cache_file.display()
            ),
            Ok(IndexUpdate::Refreshed { cache_file, events }) => println!(
                "{} {} events -> {}",
                style("Indexed").green(),
                style(events).green().bold(),
                cache_file.display()
            ),
            Err(_) => {}
        }

        result
    }
}
