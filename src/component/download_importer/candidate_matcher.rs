//! 候選賽事比對模組
//!
//! 先以字串相似度找出最多三個候選，逐一驗證；都不通過時改用子字串搜尋

use super::match_verifier::verify_match;
use crate::component::event_indexer::CatalogIndex;
use crate::tools::DiagnosticSink;
use std::cmp::Ordering;

/// 相似度候選數量上限
pub const MAX_CANDIDATES: usize = 3;

/// 最低相似度
pub const SIMILARITY_CUTOFF: f64 = 0.6;

/// 相似度候選
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    pub title: &'a str,
    pub score: f64,
}

/// 兩個標題的相似度，範圍 0.0 ~ 1.0
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// 依相似度由高到低列出候選賽事，分數相同時依標題反向排序
#[must_use]
pub fn close_matches<'a>(
    movie_title: &str,
    catalog: &'a CatalogIndex,
    limit: usize,
    cutoff: f64,
) -> Vec<Candidate<'a>> {
    let mut candidates: Vec<Candidate<'a>> = catalog
        .titles()
        .map(|title| Candidate {
            title,
            score: similarity(movie_title, title),
        })
        .filter(|candidate| candidate.score >= cutoff)
        .collect();

    candidates.sort_by(|a, b| match b.score.total_cmp(&a.score) {
        Ordering::Equal => b.title.cmp(a.title),
        other => other,
    });
    candidates.truncate(limit);
    candidates
}

/// 找出通過驗證的賽事標題
///
/// # Arguments
/// * `movie_title` - 正規化後的標題
/// * `catalog` - 賽事目錄
/// * `source_path` - 來源路徑，只用於訊息輸出
/// * `sink` - 診斷訊息接收端
///
/// # Returns
/// 第一個通過驗證的賽事標題；找不到時回傳 `None`
pub fn find_closest_match<'a>(
    movie_title: &str,
    catalog: &'a CatalogIndex,
    source_path: &str,
    sink: &dyn DiagnosticSink,
) -> Option<&'a str> {
    if movie_title.trim().is_empty() {
        sink.error(&format!("No close match found for empty title from {source_path}"));
        return None;
    }

    let mut rejected = 0_usize;
    for candidate in close_matches(movie_title, catalog, MAX_CANDIDATES, SIMILARITY_CUTOFF) {
        sink.info(&format!(
            "Considering close match: {} (similarity {:.2})",
            candidate.title, candidate.score
        ));
        if verify_match(movie_title, candidate.title, source_path, sink) {
            sink.info(&format!("Closest match found: {}", candidate.title));
            return Some(candidate.title);
        }
        rejected += 1;
    }

    let needle = movie_title.to_lowercase();
    for title in catalog.titles() {
        if !title.to_lowercase().contains(&needle) {
            continue;
        }
        sink.info(&format!("Considering substring match: {title}"));
        if verify_match(movie_title, title, source_path, sink) {
            sink.info(&format!("Substring match found: {title}"));
            return Some(title);
        }
        rejected += 1;
    }

    if rejected > 0 {
        sink.error(&format!(
            "No verified match among {rejected} candidates for the movie title {movie_title}"
        ));
    } else {
        sink.error(&format!(
            "No close match found for the movie title {movie_title}"
        ));
    }
    None
}
