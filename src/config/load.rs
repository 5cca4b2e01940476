use crate::config::types::{Config, SETTINGS_FILE_NAME, UserSettings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    pub fn new() -> Result<Self> {
        Self::load_from(Path::new(SETTINGS_FILE_NAME))
    }

    /// 讀取指定設定檔，檔案不存在或無法解析時使用預設值
    pub fn load_from(path: &Path) -> Result<Self> {
        let settings = Self::load_settings(path).unwrap_or_else(|e| {
            warn!("{e:#}, using default settings");
            UserSettings::default()
        });

        Ok(Self {
            settings,
            settings_path: PathBuf::from(path),
        })
    }

    fn load_settings(path: &Path) -> Result<UserSettings> {
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}
