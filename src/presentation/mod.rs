// プレゼンテーション層 - 表示状態と表示用の計算

pub mod reveal;
pub mod state;

pub use reveal::LetterReveal;
pub use state::FlipBoardState;
