// フリップ盤の表示状態（表示イベントの購読先）

use crate::application::flipboard::DisplayEvent;
use crate::constants::{FLIP_COUNT, STRIP_STEP_PX};
use crate::domain::flipboard::{Symbol, FILLER};

/// 1 枠分の表示状態。
/// `strip_top` は文字帯の縦位置で、1 ステップごとに 1 文字分ずり下がり、
/// 折り返しで先頭へ戻る
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipView {
    pub value: Option<Symbol>,
    pub strip_top: f32,
    pub spinning: bool,
}

impl Default for FlipView {
    fn default() -> Self {
        Self {
            value: None,
            strip_top: 0.0,
            spinning: false,
        }
    }
}

impl FlipView {
    /// オーバーレイに出す文字（未設定は埋め草）
    pub fn display_char(&self) -> char {
        self.value.map(Symbol::to_char).unwrap_or(FILLER)
    }
}

/// 盤全体の表示状態。サービスの状態遷移には関与せず、イベントを写すだけ
pub struct FlipBoardState {
    pub flips: [FlipView; FLIP_COUNT],
    pub last_target: Option<String>,
    pub rejected_count: u32,
}

impl FlipBoardState {
    pub fn new() -> Self {
        Self {
            flips: [FlipView::default(); FLIP_COUNT],
            last_target: None,
            rejected_count: 0,
        }
    }

    /// サービスからの表示イベントを取り込む
    pub fn apply(&mut self, event: &DisplayEvent) {
        match event {
            DisplayEvent::WaveStarted { target } => {
                self.last_target = Some(target.clone());
            }
            DisplayEvent::FlipStepped {
                index,
                symbol,
                wrapped,
            } => {
                if let Some(flip) = self.flips.get_mut(*index) {
                    flip.value = Some(*symbol);
                    flip.spinning = true;
                    if *wrapped {
                        flip.strip_top = 0.0;
                    } else {
                        flip.strip_top -= STRIP_STEP_PX;
                    }
                }
            }
            DisplayEvent::FlipSettled { index } => {
                if let Some(flip) = self.flips.get_mut(*index) {
                    flip.spinning = false;
                }
            }
            DisplayEvent::TargetRejected { .. } => {
                self.rejected_count += 1;
            }
        }
    }

    /// 回転中の枠があるか
    pub fn any_spinning(&self) -> bool {
        self.flips.iter().any(|f| f.spinning)
    }
}

impl Default for FlipBoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(ch: char) -> Symbol {
        Symbol::from_char(ch).unwrap()
    }

    #[test]
    fn new_state_shows_filler() {
        let state = FlipBoardState::new();
        assert!(state.flips.iter().all(|f| f.display_char() == '-'));
        assert!(!state.any_spinning());
        assert_eq!(state.rejected_count, 0);
    }

    #[test]
    fn stepped_event_moves_strip_down() {
        let mut state = FlipBoardState::new();
        state.apply(&DisplayEvent::FlipStepped {
            index: 4,
            symbol: symbol('0'),
            wrapped: false,
        });

        let flip = &state.flips[4];
        assert_eq!(flip.display_char(), '0');
        assert!(flip.spinning);
        assert_eq!(flip.strip_top, -STRIP_STEP_PX);
    }

    #[test]
    fn wrap_resets_strip_to_top() {
        let mut state = FlipBoardState::new();
        for ch in ['0', '1', '2'] {
            state.apply(&DisplayEvent::FlipStepped {
                index: 0,
                symbol: symbol(ch),
                wrapped: false,
            });
        }
        assert_eq!(state.flips[0].strip_top, -3.0 * STRIP_STEP_PX);

        state.apply(&DisplayEvent::FlipStepped {
            index: 0,
            symbol: symbol('0'),
            wrapped: true,
        });
        assert_eq!(state.flips[0].strip_top, 0.0);
    }

    #[test]
    fn settled_event_stops_spinning() {
        let mut state = FlipBoardState::new();
        state.apply(&DisplayEvent::FlipStepped {
            index: 7,
            symbol: symbol('A'),
            wrapped: false,
        });
        assert!(state.any_spinning());

        state.apply(&DisplayEvent::FlipSettled { index: 7 });
        assert!(!state.any_spinning());
        assert_eq!(state.flips[7].display_char(), 'A');
    }

    #[test]
    fn wave_and_rejection_are_tracked() {
        let mut state = FlipBoardState::new();
        state.apply(&DisplayEvent::WaveStarted {
            target: "X".to_string(),
        });
        state.apply(&DisplayEvent::TargetRejected { index: 0, ch: '@' });

        assert_eq!(state.last_target.as_deref(), Some("X"));
        assert_eq!(state.rejected_count, 1);
    }
}
