//! 數字集合擷取
//!
//! 從字串中取出所有連續 ASCII 數字片段，組成不重複的整數集合

use regex::Regex;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

static REGEX_DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid regex"));

/// 任意長度的非負整數，以去除前導零的十進位字串保存
#[derive(Debug, Clone, PartialEq, Eq)]
struct Number(String);

impl Number {
    fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Self("0".to_string())
        } else {
            Self(trimmed.to_string())
        }
    }
}

// 沒有前導零時，位數較少者較小；位數相同時依字典序
impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 字串中出現的整數集合（不保留順序、重複值合併）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberSet(BTreeSet<Number>);

impl NumberSet {
    /// 由字串擷取每一段最長連續的十進位數字（僅 `0`-`9`）
    #[must_use]
    pub fn extract(text: &str) -> Self {
        Self(
            REGEX_DIGIT_RUN
                .find_iter(text)
                .map(|run| Number::from_digits(run.as_str()))
                .collect(),
        )
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }
}

impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<&str> = self.0.iter().map(|n| n.0.as_str()).collect();
        write!(f, "{{{}}}", values.join(", "))
    }
}
