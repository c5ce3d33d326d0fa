// フリップ盤の駆動モジュール

pub mod event;
pub mod service;
pub mod stepper;
pub mod timer;

pub use event::DisplayEvent;
pub use service::FlipBoardService;
pub use stepper::{FlipStepper, StepOutcome};
pub use timer::TimerQueue;
