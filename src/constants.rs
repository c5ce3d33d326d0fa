// 表示盤定数

/// フリップ枠の数（8-4-4-4-12 の GUID 表記で 36 文字）
pub const FLIP_COUNT: usize = 36;

/// 1 ステップの間隔（ミリ秒）
pub const STEP_INTERVAL_MS: u64 = 80;

/// 枠ごとの開始遅延（ミリ秒）。枠 i は i * 50ms 後に回り始める
pub const STAGGER_INTERVAL_MS: u64 = 50;

/// フリップ帯の 1 文字分の高さ（表示用、px）
pub const STRIP_STEP_PX: f32 = 35.0;

/// ログ表示の保持行数
pub const LOG_KEEP_LINES: usize = 500;
