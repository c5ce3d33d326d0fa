// フリップ盤サービス - 切替波の編成とステップ駆動

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::constants::{STAGGER_INTERVAL_MS, STEP_INTERVAL_MS};
use crate::domain::flipboard::{FlipBoard, Symbol};
use crate::vlog;

use super::event::DisplayEvent;
use super::stepper::{FlipStepper, StepOutcome};
use super::timer::TimerQueue;

/// ステップ連鎖の予約イベント。連鎖はクロージャではなく値として持ち回る
#[derive(Clone, Copy, Debug)]
struct StepTick {
    index: usize,
    target: Symbol,
    generation: u64,
}

/// フリップ盤全体を駆動するサービス。
/// 仮想時刻の単一スレッドで動き、GUI は実時間の経過を `advance_to` で注入する。
/// 枠ごとの連鎖は互いに独立で、盤全体の完了バリアは持たない
pub struct FlipBoardService {
    board: FlipBoard,
    timers: TimerQueue<StepTick>,
    now_ms: u64,
    tx: Sender<DisplayEvent>,
}

impl FlipBoardService {
    /// サービスと表示イベントの受信側を生成する
    pub fn new() -> (Self, Receiver<DisplayEvent>) {
        let (tx, rx) = unbounded();
        (
            Self {
                board: FlipBoard::new(),
                timers: TimerQueue::new(),
                now_ms: 0,
                tx,
            },
            rx,
        )
    }

    pub fn board(&self) -> &FlipBoard {
        &self.board
    }

    /// 各枠の現在値を枠順に連結した文字列（回転中の枠は途中の値のまま）
    pub fn rendered_string(&self) -> String {
        self.board.rendered_string()
    }

    /// 予約済みのステップが残っていないか
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    /// 予約中のステップ数
    pub fn pending_steps(&self) -> usize {
        self.timers.len()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// 盤全体を target へ切り替える波を開始する。
    /// まず全枠の世代を進めて実行中の古い連鎖を失効させ、
    /// そのうえで枠 i の連鎖開始を i * 50ms 後に予約する
    pub fn switch_to_guid(&mut self, target: &str) {
        let normalized = FlipBoard::normalize_target(target);
        let target_str: String = normalized.iter().collect();
        let _ = self.tx.send(DisplayEvent::WaveStarted {
            target: target_str.clone(),
        });

        let mut last_settle_ms = 0u64;
        for (index, &ch) in normalized.iter().enumerate() {
            let Some(flip) = self.board.get_mut(index) else {
                continue;
            };
            // この枠を狙う古い波の残りステップは以後適用されない
            let generation = flip.bump_generation();

            let target_symbol = match Symbol::from_char(ch) {
                Ok(sym) => sym,
                Err(_) => {
                    // 表にない文字は枠を据え置く。致命的ではないが記録は残す
                    vlog!("枠 {} への目標 {:?} を棄却", index, ch);
                    let _ = self.tx.send(DisplayEvent::TargetRejected { index, ch });
                    continue;
                }
            };

            if flip.current() == Some(target_symbol) {
                // 既に目標値。連鎖は作らない
                continue;
            }

            let steps = FlipStepper::steps_remaining(flip, target_symbol) as u64;
            let start_ms = index as u64 * STAGGER_INTERVAL_MS;
            last_settle_ms = last_settle_ms.max(start_ms + steps * STEP_INTERVAL_MS);

            self.timers.schedule_at(
                self.now_ms + start_ms,
                StepTick {
                    index,
                    target: target_symbol,
                    generation,
                },
            );
        }

        vlog!("切替波: {} (完了見込み +{}ms)", target_str, last_settle_ms);
    }

    /// 仮想時刻を now_ms まで進め、期限の来たステップを順に適用する。
    /// 過去への巻き戻しは無視する
    pub fn advance_to(&mut self, now_ms: u64) {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
        while let Some((due_ms, tick)) = self.timers.pop_due(self.now_ms) {
            self.run_tick(due_ms, tick);
        }
    }

    /// 予約が尽きるまで期限ごとに進める。全枠の確定待ちに使う
    pub fn run_until_idle(&mut self) {
        while let Some(due_ms) = self.timers.next_due() {
            let next = due_ms.max(self.now_ms);
            self.advance_to(next);
        }
    }

    fn run_tick(&mut self, due_ms: u64, tick: StepTick) {
        let StepTick {
            index,
            target,
            generation,
        } = tick;
        let Some(flip) = self.board.get_mut(index) else {
            return;
        };
        match FlipStepper::tick(flip, target, generation) {
            StepOutcome::Superseded => {
                vlog!("枠 {} の旧世代ステップを破棄", index);
            }
            StepOutcome::AlreadySettled => {}
            StepOutcome::Advanced {
                symbol,
                wrapped,
                settled,
            } => {
                let _ = self.tx.send(DisplayEvent::FlipStepped {
                    index,
                    symbol,
                    wrapped,
                });
                if settled {
                    let _ = self.tx.send(DisplayEvent::FlipSettled { index });
                } else {
                    // 次ステップは期限基準で刻む
                    self.timers.schedule_at(due_ms + STEP_INTERVAL_MS, tick);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FLIP_COUNT;

    const ZERO: &str = "00000000-0000-0000-0000-000000000000";

    #[test]
    fn fresh_service_is_idle() {
        let (service, _rx) = FlipBoardService::new();
        assert!(service.is_idle());
        assert_eq!(service.rendered_string(), "-".repeat(FLIP_COUNT));
    }

    #[test]
    fn wave_settles_on_target() {
        let (mut service, _rx) = FlipBoardService::new();
        service.switch_to_guid(ZERO);
        assert!(!service.is_idle());

        service.run_until_idle();
        assert_eq!(service.rendered_string(), ZERO);
    }

    #[test]
    fn first_step_waits_for_stagger_delay() {
        let (mut service, rx) = FlipBoardService::new();
        service.switch_to_guid(ZERO);

        // 枠 0 は即時、枠 1 は 50ms 後に最初のステップを踏む
        service.advance_to(0);
        let stepped: Vec<usize> = rx
            .try_iter()
            .filter_map(|ev| match ev {
                DisplayEvent::FlipStepped { index, .. } => Some(index),
                _ => None,
            })
            .collect();
        assert_eq!(stepped, vec![0]);

        service.advance_to(STAGGER_INTERVAL_MS);
        let stepped: Vec<usize> = rx
            .try_iter()
            .filter_map(|ev| match ev {
                DisplayEvent::FlipStepped { index, .. } => Some(index),
                _ => None,
            })
            .collect();
        assert_eq!(stepped, vec![1]);
    }

    #[test]
    fn step_cadence_is_eighty_ms() {
        let (mut service, rx) = FlipBoardService::new();
        // 枠 0 だけ 2 ステップ必要な目標（未設定 → '0' → '1'）
        service.switch_to_guid("1");

        service.advance_to(0);
        service.advance_to(STEP_INTERVAL_MS - 1);
        let count = rx
            .try_iter()
            .filter(|ev| matches!(ev, DisplayEvent::FlipStepped { index: 0, .. }))
            .count();
        assert_eq!(count, 1);

        service.advance_to(STEP_INTERVAL_MS);
        let count = rx
            .try_iter()
            .filter(|ev| matches!(ev, DisplayEvent::FlipStepped { index: 0, .. }))
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn rejected_target_leaves_flip_unchanged() {
        let (mut service, rx) = FlipBoardService::new();
        service.switch_to_guid(ZERO);
        service.run_until_idle();

        let mut broken = String::from(ZERO);
        broken.replace_range(0..1, "@");
        service.switch_to_guid(&broken);
        service.run_until_idle();

        let rejected: Vec<(usize, char)> = rx
            .try_iter()
            .filter_map(|ev| match ev {
                DisplayEvent::TargetRejected { index, ch } => Some((index, ch)),
                _ => None,
            })
            .collect();
        assert_eq!(rejected, vec![(0, '@')]);
        // 枠 0 は前の値のまま
        assert_eq!(service.rendered_string(), ZERO);
    }

    #[test]
    fn newer_wave_supersedes_older_one() {
        let (mut service, _rx) = FlipBoardService::new();
        service.switch_to_guid("FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF");
        // 途中まで回したところで新しい波をかぶせる
        service.advance_to(400);
        service.switch_to_guid(ZERO);
        service.run_until_idle();

        assert_eq!(service.rendered_string(), ZERO);
    }
}
