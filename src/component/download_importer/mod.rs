//! 下載匯入元件
//!
//! 正規化下載資料夾名稱、比對賽事目錄，並將結果移動到媒體庫

mod candidate_matcher;
mod main;
mod match_verifier;
mod prompter;
mod resolver;
mod title_normalizer;

pub use candidate_matcher::{
    Candidate, MAX_CANDIDATES, SIMILARITY_CUTOFF, close_matches, find_closest_match, similarity,
};
pub use main::{DownloadImporter, ImportOutcome, ImportSummary};
pub use match_verifier::{MatchDecision, Mismatch, check_match, verify_match};
pub use prompter::{AutoPrompter, DialoguerPrompter, ImportPrompter};
pub use resolver::{Resolution, resolve_directory_name};
pub use title_normalizer::{
    Edition, Normalization, NormalizedName, normalize_directory_name,
    prune_edition_from_movie_title,
};
