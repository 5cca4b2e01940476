//! 賽事目錄
//!
//! 以賽事標題為 key 的唯讀對照表，保留第一次出現的順序

use serde_json::Value;
use std::collections::HashMap;

/// 賽事標題所在的欄位
pub const EVENT_TITLE_FIELD: &str = "strEvent";

/// 單一賽事的原始資料
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord(Value);

impl EventRecord {
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// 取得字串欄位
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.field("idEvent")
    }

    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.field("dateEvent")
    }
}

/// 賽事標題到賽事資料的對照表
///
/// 標題唯一且區分大小寫。重複的標題以後出現的資料覆蓋，但保留原本的位置。
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    entries: Vec<(String, EventRecord)>,
    positions: HashMap<String, usize>,
}

impl CatalogIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 由賽事陣列建立對照表，略過沒有 `strEvent` 字串欄位的項目
    #[must_use]
    pub fn from_events(events: impl IntoIterator<Item = Value>) -> Self {
        let mut index = Self::new();
        for event in events {
            let Some(title) = event.get(EVENT_TITLE_FIELD).and_then(Value::as_str) else {
                continue;
            };
            let title = title.to_string();
            index.insert(title, EventRecord::new(event));
        }
        index
    }

    fn insert(&mut self, title: String, record: EventRecord) {
        if let Some(&position) = self.positions.get(&title) {
            self.entries[position].1 = record;
        } else {
            self.positions.insert(title.clone(), self.entries.len());
            self.entries.push((title, record));
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, title: &str) -> Option<&EventRecord> {
        self.positions.get(title).map(|&i| &self.entries[i].1)
    }

    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.positions.contains_key(title)
    }

    /// 依加入順序列出所有標題
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(title, _)| title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_events_skips_untitled() {
        let index = CatalogIndex::from_events(vec![
            json!({"idEvent": "1", "strEvent": "UFC 300"}),
            json!({"idEvent": "2"}),
            json!({"idEvent": "3", "strEvent": null}),
        ]);
        assert_eq!(index.len(), 1);
        assert!(index.contains("UFC 300"));
        assert_eq!(index.get("UFC 300").and_then(EventRecord::id), Some("1"));
    }

    #[test]
    fn test_titles_are_case_sensitive() {
        let index = CatalogIndex::from_events(vec![
            json!({"strEvent": "UFC 300"}),
            json!({"strEvent": "ufc 300"}),
        ]);
        assert_eq!(index.len(), 2);
        assert!(!index.contains("Ufc 300"));
    }

    #[test]
    fn test_duplicate_title_keeps_first_position() {
        let index = CatalogIndex::from_events(vec![
            json!({"idEvent": "1", "strEvent": "UFC 300"}),
            json!({"idEvent": "2", "strEvent": "UFC 301"}),
            json!({"idEvent": "3", "strEvent": "UFC 300", "dateEvent": "2024-04-13"}),
        ]);
        let titles: Vec<&str> = index.titles().collect();
        assert_eq!(titles, vec!["UFC 300", "UFC 301"]);

        let record = index.get("UFC 300").unwrap();
        assert_eq!(record.id(), Some("3"));
        assert_eq!(record.date(), Some("2024-04-13"));
    }

    #[test]
    fn test_empty_index() {
        let index = CatalogIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.titles().count(), 0);
    }
}
