// src/log.rs
// The run log is an explicitly passed capability, not a process-global.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// Leveled, append-only run log.
pub trait RunLog {
    fn info(&self, msg: &str);
    fn warning(&self, msg: &str);
}

/// Appends to a text file in the fixed format
/// `LEVEL YYYY-MM-DD HH:MM:SS,mmm - message`. Opening the log writes a
/// blank-line separator so consecutive runs stay visually apart. Write
/// failures are swallowed; logging must never take the run down.
pub struct FileLog {
    file: Mutex<File>,
}

impl FileLog {
    pub fn open(path: &Path) -> std::io::Result<FileLog> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        let _ = file.write_all(b"\n\n\n");
        Ok(FileLog {
            file: Mutex::new(file),
        })
    }

    fn write(&self, level: &str, msg: &str) {
        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f");
        let line = format!("{level} {stamp} - {msg}\n");
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

impl RunLog for FileLog {
    fn info(&self, msg: &str) {
        self.write("INFO", msg);
    }

    fn warning(&self, msg: &str) {
        self.write("WARNING", msg);
    }
}

/// A no-op log sink.
pub struct NullLog;
impl RunLog for NullLog {
    fn info(&self, _msg: &str) {}
    fn warning(&self, _msg: &str) {}
}
