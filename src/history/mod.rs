//! History module - persisted record of past conversions

mod store;

pub use store::{HistoryEntry, HistoryError, HistoryStore};
