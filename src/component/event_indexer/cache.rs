//! 賽事快取檔
//!
//! 以 JSON 陣列儲存某賽季的賽事，並依修改時間判斷是否需要更新

use super::catalog::CatalogIndex;
use anyhow::{Context, Result};
use log::error;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// 快取檔是否在 `freshness_days` 天內修改過
#[must_use]
pub fn is_fresh(path: &Path, freshness_days: u32) -> bool {
    let Ok(modified) = fs::metadata(path).and_then(|meta| meta.modified()) else {
        return false;
    };
    let window = Duration::from_secs(u64::from(freshness_days) * SECONDS_PER_DAY);

    match SystemTime::now().checked_sub(window) {
        Some(threshold) => modified > threshold,
        None => true,
    }
}

/// 寫入賽事快取
pub fn write_events(path: &Path, events: &[Value]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let content = serde_json::to_string(events).context("Failed to serialize events")?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write events to {}", path.display()))
}

/// 讀取賽事快取
pub fn read_events(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("{} does not exist or cannot be read", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to decode JSON from {}", path.display()))
}

/// 讀取快取並建立賽事目錄，失敗時記錄錯誤並回傳空目錄
#[must_use]
pub fn read_index(path: &Path) -> CatalogIndex {
    match read_events(path) {
        Ok(events) => CatalogIndex::from_events(events),
        Err(e) => {
            error!("{e:#}");
            CatalogIndex::new()
        }
    }
}
