// アプリケーション状態

use std::path::Path;
use std::time::Instant;

use crossbeam_channel::Receiver;

use crate::application::flipboard::{DisplayEvent, FlipBoardService};
use crate::application::guid::{self, GuidKind, GuidRecord};
use crate::constants::LOG_KEEP_LINES;
use crate::infrastructure::storage::{FileHistoryWriter, HistoryWriter};
use crate::presentation::reveal::LetterReveal;
use crate::presentation::state::FlipBoardState;

/// アプリケーション状態
pub struct App {
    pub service: FlipBoardService,
    pub rx: Receiver<DisplayEvent>,
    pub view: FlipBoardState,
    pub reveal: LetterReveal,
    pub started: Instant,
    pub history: Vec<GuidRecord>,
    pub out_name: String,
    pub log_lines: Vec<String>,
    pub verbose_logging: bool,
}

impl Default for App {
    fn default() -> Self {
        let (mut service, rx) = FlipBoardService::new();
        // 起動時はゼロ GUID への切替から始める
        service.switch_to_guid(&guid::zero_guid());
        Self {
            service,
            rx,
            view: FlipBoardState::new(),
            reveal: LetterReveal::default(),
            started: Instant::now(),
            history: Vec::new(),
            out_name: "guid_history.jsonl".to_string(),
            log_lines: vec!["待機中".into()],
            verbose_logging: false,
        }
    }
}

impl App {
    pub fn push_log(&mut self, s: String) {
        self.log_lines.push(s);
        if self.log_lines.len() > LOG_KEEP_LINES {
            let cut = self.log_lines.len() - LOG_KEEP_LINES;
            self.log_lines.drain(0..cut);
        }
    }

    /// 指定方式で GUID を生成して盤を切り替える
    pub fn generate(&mut self, kind: GuidKind) {
        let value = match kind {
            GuidKind::Zero => guid::zero_guid(),
            GuidKind::RandomV4 => guid::random_v4_guid(),
            GuidKind::TimeBased => guid::time_based_guid(),
        };
        self.push_log(format!("{}: {}", kind.label(), value));
        self.history.push(GuidRecord {
            guid: value.clone(),
            kind,
            unix_ms: guid::current_unix_ms(),
        });
        self.service.switch_to_guid(&value);
    }

    /// 現在の表示値を読み出す（回転中は途中の値が混ざる）
    pub fn copy_result(&mut self) -> String {
        let s = self.service.rendered_string();
        self.push_log(format!("コピー: {}", s));
        s
    }

    /// 履歴を JSON Lines で保存する。失敗しても盤の状態には触れない
    pub fn save_history(&mut self, path: &Path) {
        let result = FileHistoryWriter::create(path)
            .and_then(|mut writer| writer.write_all(&self.history).map(|_| writer.count()));
        match result {
            Ok(count) => self.push_log(format!("履歴を保存: {} ({} 件)", path.display(), count)),
            Err(e) => self.push_log(format!("履歴の保存に失敗: {e}")),
        }
    }
}
