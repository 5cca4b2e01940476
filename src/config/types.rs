use crate::component::download_importer::Edition;
use crate::tools::sanitize_file_name;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 設定檔預設名稱（位於目前工作目錄）
pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// 下載完成的資料夾
    pub source_dir: PathBuf,
    /// 媒體庫目錄
    pub dest_dir: PathBuf,
    /// 賽事快取檔所在目錄
    pub cache_dir: PathBuf,
    /// 要處理的資料夾名稱前綴（不分大小寫）
    pub directory_prefix: String,
    pub delimiter: char,
    /// 目標資料夾名稱格式，可用 `{title}` 與 `{edition_tag}`
    pub rename_format: String,
    /// 可用 `{api_key}`、`{league_id}`、`{season}`
    pub catalog_url_template: String,
    pub api_key: String,
    pub league_id: String,
    pub freshness_days: u32,
    pub auto_delete_empty_source_dir: bool,
    pub auto_overwrite_destination: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("/volume1/data/sabnzbd/completed/"),
            dest_dir: PathBuf::from("/volume1/data/media/movies"),
            cache_dir: PathBuf::from("."),
            directory_prefix: "UFC.".to_string(),
            delimiter: '.',
            rename_format: "{title} {edition-{edition_tag}}".to_string(),
            catalog_url_template:
                "https://www.thesportsdb.com/api/v1/json/{api_key}/eventsseason.php?id={league_id}&s={season}"
                    .to_string(),
            api_key: "3".to_string(),
            league_id: "4443".to_string(),
            freshness_days: 7,
            auto_delete_empty_source_dir: false,
            auto_overwrite_destination: false,
        }
    }
}

impl UserSettings {
    /// 指定賽季的快取檔路徑
    #[must_use]
    pub fn cache_file(&self, season: i32) -> PathBuf {
        self.cache_dir.join(format!("events_{season}.json"))
    }

    /// 代入 API key 與聯盟代號，保留 `{season}`
    #[must_use]
    pub fn league_url_template(&self) -> String {
        self.catalog_url_template
            .replace("{api_key}", &self.api_key)
            .replace("{league_id}", &self.league_id)
    }

    /// 產生媒體庫中的資料夾名稱，賽事標題會先清理成單一路徑元件
    #[must_use]
    pub fn destination_name(&self, event_title: &str, edition: Edition) -> String {
        self.rename_format
            .replace("{edition_tag}", edition.tag())
            .replace("{title}", &sanitize_file_name(event_title))
    }

    /// 資料夾名稱是否符合前綴
    #[must_use]
    pub fn matches_prefix(&self, dir_name: &str) -> bool {
        dir_name
            .to_uppercase()
            .starts_with(&self.directory_prefix.to_uppercase())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: UserSettings,
    pub settings_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_file_name() {
        let settings = UserSettings {
            cache_dir: PathBuf::from("/tmp/cache"),
            ..UserSettings::default()
        };
        assert_eq!(
            settings.cache_file(2025),
            PathBuf::from("/tmp/cache/events_2025.json")
        );
    }

    #[test]
    fn test_league_url_template() {
        let settings = UserSettings::default();
        assert_eq!(
            settings.league_url_template().replace("{season}", "2024"),
            "https://www.thesportsdb.com/api/v1/json/3/eventsseason.php?id=4443&s=2024"
        );
    }

    #[test]
    fn test_destination_name() {
        let settings = UserSettings::default();
        assert_eq!(
            settings.destination_name("UFC 300", Edition::EarlyPrelims),
            "UFC 300 {edition-Early Prelims}"
        );
        assert_eq!(
            settings.destination_name("UFC 300", Edition::MainEvent),
            "UFC 300 {edition-Main Event}"
        );
    }

    #[test]
    fn test_destination_name_sanitizes_title() {
        let settings = UserSettings::default();
        assert_eq!(
            settings.destination_name("UFC 317: Topuria/Oliveira", Edition::MainEvent),
            "UFC 317 Topuria Oliveira {edition-Main Event}"
        );
        let name = settings.destination_name("../../outside", Edition::Prelims);
        assert!(!name.contains('/'));
        assert_eq!(name, "outside {edition-Prelims}");
    }

    #[test]
    fn test_matches_prefix_case_insensitive() {
        let settings = UserSettings::default();
        assert!(settings.matches_prefix("UFC.300.1080p"));
        assert!(settings.matches_prefix("ufc.300.1080p"));
        assert!(!settings.matches_prefix("UFC 300"));
        assert!(!settings.matches_prefix("Bellator.300"));
    }

    #[test]
    fn test_settings_partial_json_uses_defaults() {
        let settings: UserSettings =
            serde_json::from_str(r#"{"freshness_days": 3, "delimiter": "_"}"#).unwrap();
        assert_eq!(settings.freshness_days, 3);
        assert_eq!(settings.delimiter, '_');
        assert_eq!(settings.directory_prefix, "UFC.");
    }
}
