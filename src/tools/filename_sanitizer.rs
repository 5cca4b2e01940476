//! 檔名清理
//!
//! 賽事標題來自外部目錄，放進路徑前先去除路徑分隔符與非法字元

use regex::Regex;
use std::sync::LazyLock;

static REGEX_ILLEGAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*\x00-\x1F]"#).expect("Invalid regex"));

static REGEX_MULTIPLE_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// 清理後為空時使用的名稱
const FALLBACK_NAME: &str = "_";

/// 將字串轉成可作為單一路徑元件的名稱
///
/// 非法字元換成空白、連續空白合併，並去除頭尾空白與結尾的點
#[must_use]
pub fn sanitize_file_name(name: &str) -> String {
    let replaced = REGEX_ILLEGAL_CHARS.replace_all(name, " ");
    let collapsed = REGEX_MULTIPLE_SPACES.replace_all(&replaced, " ");
    let trimmed = collapsed.trim().trim_end_matches(['.', ' ']);

    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_plain_title() {
        assert_eq!(sanitize_file_name("UFC Fight Night 234"), "UFC Fight Night 234");
        assert_eq!(
            sanitize_file_name("UFC 299 O'Malley vs. Vera 2"),
            "UFC 299 O'Malley vs. Vera 2"
        );
    }

    #[test]
    fn test_sanitize_colon_and_slash() {
        assert_eq!(
            sanitize_file_name("UFC 317: Topuria/Oliveira"),
            "UFC 317 Topuria Oliveira"
        );
    }

    #[test]
    fn test_sanitize_parent_traversal() {
        assert_eq!(sanitize_file_name("../../etc"), "etc");
        assert_eq!(sanitize_file_name(".."), FALLBACK_NAME);
        assert_eq!(sanitize_file_name("..\\evil"), "evil");
    }

    #[test]
    fn test_sanitize_control_and_reserved_chars() {
        assert_eq!(sanitize_file_name("UFC\t300\n<Main>|?*\""), "UFC 300 Main");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize_file_name(""), FALLBACK_NAME);
        assert_eq!(sanitize_file_name(" / "), FALLBACK_NAME);
    }
}
