// GUID 値の生成（盤とは独立した純粋な計算）

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::Serialize;

/// 生成方式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GuidKind {
    Zero,
    RandomV4,
    TimeBased,
}

impl GuidKind {
    /// UI・ログ表示用のラベル
    pub fn label(self) -> &'static str {
        match self {
            GuidKind::Zero => "ゼロ",
            GuidKind::RandomV4 => "ランダム v4",
            GuidKind::TimeBased => "時刻ベース",
        }
    }
}

/// 生成した値の記録（履歴出力用）
#[derive(Clone, Debug, Serialize)]
pub struct GuidRecord {
    pub guid: String,
    pub kind: GuidKind,
    pub unix_ms: u64,
}

/// すべてゼロの GUID
pub fn zero_guid() -> String {
    "00000000-0000-0000-0000-000000000000".to_string()
}

/// 大文字の v4 形式 GUID（バージョン 4、バリアント 8..=B）
pub fn random_v4_guid() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill(&mut bytes[..]);
    bytes[6] = (bytes[6] & 0x0F) | 0x40;
    bytes[8] = (bytes[8] & 0x3F) | 0x80;

    let hex = to_upper_hex(&bytes);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32],
    )
}

/// 先頭 8 文字を unix 秒から作る時刻ベース GUID。
/// 残り 24 文字はランダムな 12 バイトを 4-4-4-12 に区切る
pub fn time_based_guid() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut bytes = [0u8; 12];
    rand::thread_rng().fill(&mut bytes[..]);
    let hex = to_upper_hex(&bytes);

    format!(
        "{:08X}-{}-{}-{}-{}",
        secs as u32,
        &hex[0..4],
        &hex[4..8],
        &hex[8..12],
        &hex[12..24],
    )
}

/// 現在時刻（unix ミリ秒）。履歴の打刻に使う
pub fn current_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn to_upper_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flipboard::Symbol;

    /// 36 文字・文字表のみ・ハイフンは区切り位置のみ、を検証する
    fn assert_guid_shape(guid: &str) {
        assert_eq!(guid.chars().count(), 36);
        for (i, ch) in guid.chars().enumerate() {
            assert!(Symbol::from_char(ch).is_ok(), "不正な文字 {:?} @ {}", ch, i);
            let is_separator = matches!(i, 8 | 13 | 18 | 23);
            assert_eq!(ch == '-', is_separator, "位置 {} の文字 {:?}", i, ch);
        }
    }

    #[test]
    fn zero_guid_shape() {
        let guid = zero_guid();
        assert_guid_shape(&guid);
        assert!(guid.chars().all(|c| c == '0' || c == '-'));
    }

    #[test]
    fn random_v4_guid_shape() {
        for _ in 0..32 {
            let guid = random_v4_guid();
            assert_guid_shape(&guid);

            // バージョンとバリアントの固定ニブル
            assert_eq!(guid.as_bytes()[14], b'4');
            assert!(matches!(guid.as_bytes()[19], b'8' | b'9' | b'A' | b'B'));
        }
    }

    #[test]
    fn time_based_guid_shape() {
        let guid = time_based_guid();
        assert_guid_shape(&guid);
    }

    #[test]
    fn time_based_prefix_tracks_clock() {
        let guid = time_based_guid();
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let prefix = u32::from_str_radix(&guid[0..8], 16).unwrap() as u64;
        assert!(prefix.abs_diff(secs) <= 2);
    }

    #[test]
    fn record_serializes_to_json() {
        let record = GuidRecord {
            guid: zero_guid(),
            kind: GuidKind::Zero,
            unix_ms: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"Zero\""));
        assert!(json.contains("00000000-0000-0000-0000-000000000000"));
    }
}
