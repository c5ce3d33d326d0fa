// 表示イベント定義（UI 層に依存しない）

use crate::domain::flipboard::Symbol;

/// フリップ盤サービスから表示側への通知。
/// 描画はこのイベント列を購読して行い、遷移処理には組み込まない
#[derive(Clone, Debug)]
pub enum DisplayEvent {
    /// 切替波の開始（正規化後の目標文字列）
    WaveStarted { target: String },
    /// 枠の値が 1 記号進んだ
    FlipStepped {
        index: usize,
        symbol: Symbol,
        wrapped: bool,
    },
    /// 枠が目標に到達して停止した
    FlipSettled { index: usize },
    /// 文字表にない目標文字を受けて枠を据え置いた
    TargetRejected { index: usize, ch: char },
}
