// ストレージ

pub mod writer;

pub use writer::{FileHistoryWriter, HistoryWriter, MemoryHistoryWriter};
