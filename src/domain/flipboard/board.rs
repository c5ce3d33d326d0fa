// フリップ盤 - 36 枠の集約

use crate::constants::FLIP_COUNT;

use super::alphabet::FILLER;
use super::flip::Flip;

/// 36 枠のフリップ盤。起動時に一度だけ構築され、以後は枠を使い回す。
/// 枠 i は目標文字列の i 文字目と 1:1 に対応する
#[derive(Clone, Debug)]
pub struct FlipBoard {
    flips: [Flip; FLIP_COUNT],
}

impl FlipBoard {
    /// 全枠が未設定の盤を作成
    pub fn new() -> Self {
        Self {
            flips: std::array::from_fn(Flip::new),
        }
    }

    /// 枠を取得（範囲外は None）
    pub fn get(&self, index: usize) -> Option<&Flip> {
        self.flips.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Flip> {
        self.flips.get_mut(index)
    }

    /// 盤全体への読み取り専用アクセス
    pub fn flips(&self) -> &[Flip; FLIP_COUNT] {
        &self.flips
    }

    /// 各枠の現在値を枠順に連結した文字列（未設定枠は埋め草）。
    /// 回転中に読むと確定済みと未更新の文字が混ざるが、それは想定内の挙動
    pub fn rendered_string(&self) -> String {
        self.flips.iter().map(Flip::display_char).collect()
    }

    /// 目標文字列を 36 文字へ正規化する。
    /// 不足分は埋め草で右詰め、37 文字目以降は切り捨て
    pub fn normalize_target(target: &str) -> [char; FLIP_COUNT] {
        let mut out = [FILLER; FLIP_COUNT];
        for (slot, ch) in out.iter_mut().zip(target.chars()) {
            *slot = ch;
        }
        out
    }
}

impl Default for FlipBoard {
    fn default() -> Self {
        Self::new()
    }
}
