// フリップ文字表（ドメイン層）

use anyhow::{anyhow, Result};

/// 文字表の記号数（0-9, A-F, ハイフン）
pub const ALPHABET_LEN: usize = 17;

/// 記号の並び順。全枠で共有し、決して変更しない
pub const ALPHABET_CHARS: [char; ALPHABET_LEN] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', '-',
];

/// 埋め草記号。36 文字に満たない目標の右詰めにも使う
pub const FILLER: char = '-';

/// 文字表上の 1 記号（内部表現は表のインデックス）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbol(u8);

impl Symbol {
    /// 文字から記号へ変換。表にない文字はエラー
    pub fn from_char(ch: char) -> Result<Self> {
        ALPHABET_CHARS
            .iter()
            .position(|&c| c == ch)
            .map(|i| Symbol(i as u8))
            .ok_or_else(|| anyhow!("文字表にない文字: {:?}", ch))
    }

    /// 表のインデックスから記号へ（範囲外は折り返す）
    pub fn at(index: usize) -> Self {
        Symbol((index % ALPHABET_LEN) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        ALPHABET_CHARS[self.0 as usize]
    }

    /// 表の次の記号（末尾からは先頭へ折り返す）
    pub fn next(self) -> Symbol {
        Symbol::at(self.index() + 1)
    }

    /// 末尾の記号かどうか（次の前進で折り返しが起きる）
    pub fn is_last(self) -> bool {
        self.index() == ALPHABET_LEN - 1
    }
}

/// `from` から `to` まで前進するステップ数（(to - from) mod 17）
pub fn step_distance(from: Symbol, to: Symbol) -> usize {
    (to.index() + ALPHABET_LEN - from.index()) % ALPHABET_LEN
}
