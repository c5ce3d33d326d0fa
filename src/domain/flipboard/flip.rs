// フリップ枠（1 表示枠）の状態

use super::alphabet::{Symbol, FILLER};

/// 1 枠分のフリップ。現在値、折り返し検出用の巻き上げ量、世代トークンを持つ。
/// 値が変わるのはステッパ経由の前進時だけ
#[derive(Clone, Copy, Debug)]
pub struct Flip {
    index: usize,
    current: Option<Symbol>,
    winding_offset: u32,
    generation: u64,
}

impl Flip {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            current: None,
            winding_offset: 0,
            generation: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<Symbol> {
        self.current
    }

    /// 前回の折り返しからのステップ数
    pub fn winding_offset(&self) -> u32 {
        self.winding_offset
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 新しい切替波の開始。実行中の古いステップ連鎖はここで失効する
    pub fn bump_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// 表の順に 1 記号前進する。戻り値は (新しい記号, 折り返したか)。
    /// 折り返し時は巻き上げ量を 0 に戻し、それ以外は 1 増やす
    pub fn advance(&mut self) -> (Symbol, bool) {
        let (next, wrapped) = match self.current {
            Some(s) if s.is_last() => (Symbol::at(0), true),
            Some(s) => (s.next(), false),
            // 未設定の枠は表の先頭から回り始める
            None => (Symbol::at(0), false),
        };
        if wrapped {
            self.winding_offset = 0;
        } else {
            self.winding_offset += 1;
        }
        self.current = Some(next);
        (next, wrapped)
    }

    /// 表示文字（未設定は埋め草）
    pub fn display_char(&self) -> char {
        self.current.map(Symbol::to_char).unwrap_or(FILLER)
    }
}
