// アプリケーション層

pub mod flipboard;
pub mod guid;

pub use flipboard::{DisplayEvent, FlipBoardService};
