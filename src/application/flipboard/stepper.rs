// 1 枠分のステップ駆動

use crate::domain::flipboard::{step_distance, Flip, Symbol};

/// 1 ティックの結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// 世代が入れ替わっており、この連鎖はもう枠への権限を持たない
    Superseded,
    /// すでに目標値で停止している
    AlreadySettled,
    /// 1 記号前進した
    Advanced {
        symbol: Symbol,
        wrapped: bool,
        settled: bool,
    },
}

/// フリップ 1 枠を目標へ向けて進めるステッパのユーティリティ
pub struct FlipStepper;

impl FlipStepper {
    /// 連鎖 1 ティック分の遷移。描画や再予約は呼び出し側の責務。
    /// 停止判定は次ステップの予約より前に行われるため、目標を通り過ぎることはない
    pub fn tick(flip: &mut Flip, target: Symbol, generation: u64) -> StepOutcome {
        if flip.generation() != generation {
            return StepOutcome::Superseded;
        }
        if flip.current() == Some(target) {
            return StepOutcome::AlreadySettled;
        }
        let (symbol, wrapped) = flip.advance();
        StepOutcome::Advanced {
            symbol,
            wrapped,
            settled: symbol == target,
        }
    }

    /// 現在値から目標までの残りステップ数。
    /// 未設定の枠は表の先頭に入る 1 ステップ分を加算する
    pub fn steps_remaining(flip: &Flip, target: Symbol) -> usize {
        match flip.current() {
            Some(cur) => step_distance(cur, target),
            None => 1 + step_distance(Symbol::at(0), target),
        }
    }
}
