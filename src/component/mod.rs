//! 功能元件模組
//!
//! 每個子模組實現一個獨立的功能，包含主要邏輯和專用工具

pub mod download_importer;
pub mod event_indexer;

pub use download_importer::DownloadImporter;
pub use event_indexer::EventIndexer;
