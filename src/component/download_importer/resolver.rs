//! 將資料夾名稱對應到賽事標題
//!
//! 串接標題正規化、候選比對與驗證，回傳匯入流程需要的決定

use super::candidate_matcher::find_closest_match;
use super::title_normalizer::{NormalizedName, Normalization, normalize_directory_name};
use crate::component::event_indexer::CatalogIndex;
use crate::tools::DiagnosticSink;

/// 資料夾名稱的比對結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// 劇集內容，不處理
    Episodic,
    /// 找不到通過驗證的賽事
    NoMatch { normalized: NormalizedName },
    Matched {
        normalized: NormalizedName,
        event_title: String,
    },
}

/// 解析資料夾名稱並找出對應賽事
///
/// 呼叫端須確保 `catalog` 不是空的
pub fn resolve_directory_name(
    raw_name: &str,
    delimiter: char,
    catalog: &CatalogIndex,
    source_path: &str,
    sink: &dyn DiagnosticSink,
) -> Resolution {
    let normalized = match normalize_directory_name(raw_name, delimiter) {
        Normalization::Episodic => return Resolution::Episodic,
        Normalization::Title(name) => name,
    };

    match find_closest_match(&normalized.title, catalog, source_path, sink) {
        Some(event_title) => Resolution::Matched {
            event_title: event_title.to_string(),
            normalized,
        },
        None => Resolution::NoMatch { normalized },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::download_importer::Edition;
    use crate::tools::RecordingSink;
    use serde_json::json;

    fn catalog() -> CatalogIndex {
        CatalogIndex::from_events(vec![
            json!({"strEvent": "UFC Fight Night 234"}),
            json!({"strEvent": "UFC on ESPN 68"}),
            json!({"strEvent": "UFC 300"}),
        ])
    }

    #[test]
    fn test_resolve_episodic() {
        let sink = RecordingSink::new();
        let result = resolve_directory_name(
            "UFC.Embedded.S01E02.1080p",
            '.',
            &catalog(),
            "/dl/UFC.Embedded.S01E02.1080p",
            &sink,
        );
        assert_eq!(result, Resolution::Episodic);
        assert!(sink.records().is_empty());
    }

    #[test]
    fn test_resolve_matched_with_edition() {
        let sink = RecordingSink::new();
        let result = resolve_directory_name(
            "UFC.Fight.Night.234.Early.Prelims.720p.WEB",
            '.',
            &catalog(),
            "/dl/x",
            &sink,
        );
        let Resolution::Matched {
            normalized,
            event_title,
        } = result
        else {
            panic!("expected a match");
        };
        assert_eq!(event_title, "UFC Fight Night 234");
        assert_eq!(normalized.title, "UFC Fight Night 234");
        assert_eq!(normalized.edition, Edition::EarlyPrelims);
    }

    #[test]
    fn test_resolve_no_match() {
        let sink = RecordingSink::new();
        let result =
            resolve_directory_name("UFC.on.ESPN.69.1080p", '.', &catalog(), "/dl/x", &sink);
        let Resolution::NoMatch { normalized } = result else {
            panic!("expected no match");
        };
        assert_eq!(normalized.title, "UFC on ESPN 69");
    }
}
