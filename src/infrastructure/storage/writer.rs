// 生成履歴の書き込み

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;

use crate::application::guid::GuidRecord;

/// 生成履歴を書き込むための trait
pub trait HistoryWriter {
    /// 単一の記録を書き込む
    fn write_record(&mut self, record: &GuidRecord) -> Result<()>;

    /// 複数の記録をまとめて書き込む
    fn write_all(&mut self, records: &[GuidRecord]) -> Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// 書き込みを完了（フラッシュ）
    fn flush(&mut self) -> Result<()>;

    /// 書き込んだ記録数を取得
    fn count(&self) -> u64;
}

/// JSON Lines 形式（1 行 1 記録）のファイル出力
pub struct FileHistoryWriter {
    writer: BufWriter<File>,
    count: u64,
}

impl FileHistoryWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            count: 0,
        })
    }
}

impl HistoryWriter for FileHistoryWriter {
    fn write_record(&mut self, record: &GuidRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;
        writeln!(self.writer, "{}", json)?;
        self.count += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Drop for FileHistoryWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// メモリ内実装（テスト用）
pub struct MemoryHistoryWriter {
    records: Vec<GuidRecord>,
}

impl MemoryHistoryWriter {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[GuidRecord] {
        &self.records
    }
}

impl Default for MemoryHistoryWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryWriter for MemoryHistoryWriter {
    fn write_record(&mut self, record: &GuidRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn count(&self) -> u64 {
        self.records.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::guid::{zero_guid, GuidKind};

    fn test_record() -> GuidRecord {
        GuidRecord {
            guid: zero_guid(),
            kind: GuidKind::Zero,
            unix_ms: 1_700_000_000_000,
        }
    }

    #[test]
    fn memory_writer_stores_records() {
        let mut writer = MemoryHistoryWriter::new();

        writer.write_record(&test_record()).unwrap();
        writer.write_record(&test_record()).unwrap();

        assert_eq!(writer.count(), 2);
        assert_eq!(writer.records().len(), 2);
    }

    #[test]
    fn memory_writer_batch_write() {
        let mut writer = MemoryHistoryWriter::new();
        let records = vec![test_record(), test_record(), test_record()];

        writer.write_all(&records).unwrap();

        assert_eq!(writer.count(), 3);
    }

    #[test]
    fn memory_writer_flush_succeeds() {
        let mut writer = MemoryHistoryWriter::new();
        assert!(writer.flush().is_ok());
    }
}
