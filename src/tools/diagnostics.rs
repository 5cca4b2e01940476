//! 診斷訊息輸出
//!
//! 比對核心不直接依賴全域 logger，而是透過 `DiagnosticSink` 回報訊息

use log::Level;
use std::cell::RefCell;

/// 分級訊息的接收端
pub trait DiagnosticSink {
    fn emit(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }
}

/// 轉送至 `log` facade 的接收端
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, level: Level, message: &str) {
        log::log!(target: "ufc_library_importer::matcher", level, "{message}");
    }
}

/// 將訊息保存在記憶體中的接收端，方便檢查輸出內容
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: RefCell<Vec<(Level, String)>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.borrow().clone()
    }

    /// 取得指定等級的訊息
    #[must_use]
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, level: Level, message: &str) {
        self.records.borrow_mut().push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_levels() {
        let sink = RecordingSink::new();
        sink.info("considering");
        sink.warn("Potential mismatch");
        sink.error("no close match");

        assert_eq!(sink.records().len(), 3);
        assert_eq!(sink.messages_at(Level::Warn), vec!["Potential mismatch"]);
        assert_eq!(sink.messages_at(Level::Error), vec!["no close match"]);
    }

    #[test]
    fn test_recording_sink_clear() {
        let sink = RecordingSink::new();
        sink.info("a");
        sink.clear();
        assert!(sink.records().is_empty());
    }
}
