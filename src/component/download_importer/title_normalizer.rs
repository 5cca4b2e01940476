//! 標題正規化模組
//!
//! 將下載資料夾名稱轉換成可比對的標題，並判斷賽事段落（主賽、Prelims、Early Prelims）

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// 劇集標記，例如 `S01E02`
static REGEX_EPISODE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^S\d{2}E\d{2}").expect("Invalid regex"));

/// 解析度標記，例如 `720p`、`1080p`、`2160p`
static REGEX_RESOLUTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3,4}p").expect("Invalid regex"));

/// 賽事段落
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Edition {
    #[default]
    MainEvent,
    Prelims,
    EarlyPrelims,
}

impl Edition {
    /// 依標題內容判斷段落，Early Prelims 優先於 Prelims
    #[must_use]
    pub fn classify(title: &str) -> Self {
        let lower = title.to_lowercase();
        if lower.contains("early prelims") {
            Self::EarlyPrelims
        } else if lower.contains("prelims") {
            Self::Prelims
        } else {
            Self::MainEvent
        }
    }

    /// 用於重新命名格式的段落標籤
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::MainEvent => "Main Event",
            Self::Prelims => "Prelims",
            Self::EarlyPrelims => "Early Prelims",
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// 正規化後的標題
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// 去除解析度標記後、尚未移除段落字詞的標題
    pub working_title: String,
    /// 移除段落字詞後用於比對的標題
    pub title: String,
    pub edition: Edition,
}

/// 正規化結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalization {
    /// 名稱含有劇集標記，不是單場賽事
    Episodic,
    Title(NormalizedName),
}

/// 正規化資料夾名稱
///
/// # Arguments
/// * `raw_name` - 下載完成的資料夾名稱
/// * `delimiter` - 名稱中的分隔字元（通常為 `.`）
pub fn normalize_directory_name(raw_name: &str, delimiter: char) -> Normalization {
    let tokens: Vec<&str> = raw_name.split(delimiter).collect();

    if tokens.iter().any(|token| REGEX_EPISODE_MARKER.is_match(token)) {
        return Normalization::Episodic;
    }

    let end = tokens
        .iter()
        .position(|token| REGEX_RESOLUTION_MARKER.is_match(token))
        .unwrap_or(tokens.len());
    let working_title = tokens[..end].join(" ");

    // 必須在移除段落字詞之前判斷段落
    let edition = Edition::classify(&working_title);
    let title = prune_edition_from_movie_title(&working_title);

    Normalization::Title(NormalizedName {
        working_title,
        title,
        edition,
    })
}

/// 移除所有包含 `prelims` 或 `early` 的字詞（不分大小寫）
#[must_use]
pub fn prune_edition_from_movie_title(title: &str) -> String {
    title
        .split(' ')
        .filter(|word| {
            let lower = word.to_lowercase();
            !lower.contains("prelims") && !lower.contains("early")
        })
        .collect::<Vec<_>>()
        .join(" ")
}
