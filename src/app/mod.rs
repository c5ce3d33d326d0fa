// アプリ層（GUI）

pub mod state;
pub mod ui;

pub use state::App;
