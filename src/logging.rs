// 詳細ログ（ファイル出力）

use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// 詳細ログの有効フラグ
pub static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

/// ログファイルのグローバルハンドル
static LOG_FILE: Mutex<Option<BufWriter<File>>> = Mutex::new(None);

/// ログファイルを開く（既存内容は破棄）
pub fn init_log_file(path: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut guard = LOG_FILE.lock().unwrap();
    *guard = Some(BufWriter::new(file));
    Ok(())
}

/// 1 行書き込んで即フラッシュする
pub fn write_log(message: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(w) = guard.as_mut() {
            let _ = writeln!(w, "{}", message);
            let _ = w.flush();
        }
    }
}

/// 詳細ログの有効/無効を切り替える
pub fn set_verbose(enabled: bool) {
    VERBOSE_LOGGING.store(enabled, Ordering::Relaxed);
}

/// 詳細ログが有効かチェック
pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// 詳細ログ出力マクロ（ファイル出力）
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            $crate::logging::write_log(&format!($($arg)*));
        }
    };
}
