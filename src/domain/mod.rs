// ドメイン層 - 表示盤の型と規則

pub mod flipboard;

pub use flipboard::{Flip, FlipBoard, Symbol};
