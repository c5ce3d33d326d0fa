// GUID スプリットフラップ表示 - ライブラリモジュール

pub mod constants;
pub mod domain;         // ドメイン層
pub mod application;    // アプリケーション層
pub mod infrastructure; // インフラ層
pub mod presentation;   // プレゼンテーション層
pub mod app;
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use app::App;
pub use application::flipboard::{DisplayEvent, FlipBoardService};
pub use constants::{FLIP_COUNT, STAGGER_INTERVAL_MS, STEP_INTERVAL_MS};
pub use domain::flipboard::{Flip, FlipBoard, Symbol};
