// フリップ盤ドメイン

pub mod alphabet;
pub mod board;
pub mod flip;

pub use alphabet::{step_distance, Symbol, ALPHABET_CHARS, ALPHABET_LEN, FILLER};
pub use board::FlipBoard;
pub use flip::Flip;
