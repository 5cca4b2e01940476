//! 比對驗證模組
//!
//! 以數字集合檢查模糊比對的結果，避免把 UFC 299 匯入成 UFC 298

use crate::tools::{DiagnosticSink, NumberSet};

/// 被拒絕的比對紀錄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub movie_title: String,
    pub event_title: String,
    pub movie_numbers: NumberSet,
    pub event_numbers: NumberSet,
    pub source_path: String,
}

impl Mismatch {
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Potential mismatch for {}: movie title '{}' has numbers {} but event '{}' has numbers {}",
            self.source_path,
            self.movie_title,
            self.movie_numbers,
            self.event_title,
            self.event_numbers
        )
    }
}

/// 驗證結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchDecision {
    Accepted,
    Rejected(Mismatch),
}

impl MatchDecision {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// 判斷比對是否可信，不產生任何訊息
///
/// 賽事標題的數字必須全部出現在影片標題中；賽事標題沒有數字時一律接受。
/// 影片標題多出的數字（場次、日期）不影響結果。
#[must_use]
pub fn check_match(movie_title: &str, event_title: &str, source_path: &str) -> MatchDecision {
    let movie_numbers = NumberSet::extract(movie_title);
    let event_numbers = NumberSet::extract(event_title);

    // 兩邊都沒有數字時也會接受，目前沒有造成問題
    if event_numbers.is_empty() || event_numbers.is_subset(&movie_numbers) {
        return MatchDecision::Accepted;
    }

    MatchDecision::Rejected(Mismatch {
        movie_title: movie_title.to_string(),
        event_title: event_title.to_string(),
        movie_numbers,
        event_numbers,
        source_path: source_path.to_string(),
    })
}

/// 驗證比對，拒絕時輸出一則警告
pub fn verify_match(
    movie_title: &str,
    event_title: &str,
    source_path: &str,
    sink: &dyn DiagnosticSink,
) -> bool {
    match check_match(movie_title, event_title, source_path) {
        MatchDecision::Accepted => true,
        MatchDecision::Rejected(mismatch) => {
            sink.warn(&mismatch.message());
            false
        }
    }
}
