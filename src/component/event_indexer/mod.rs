//! 賽事索引元件
//!
//! 下載並快取當季賽事，提供依標題查詢的賽事目錄

mod cache;
mod catalog;
mod catalog_source;
mod main;

pub use cache::{is_fresh, read_events, read_index, write_events};
pub use catalog::{CatalogIndex, EVENT_TITLE_FIELD, EventRecord};
pub use catalog_source::{CatalogSource, SportsDbSource, parse_season_response};
pub use main::{EventIndexer, IndexUpdate, current_season};
