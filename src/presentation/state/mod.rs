// UI 状態管理

pub mod flipboard;

pub use flipboard::{FlipBoardState, FlipView};
