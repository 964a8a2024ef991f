use std::fs;
use std::path::PathBuf;

use marketrecap_core::{file_stamp, ReportMode};
use time::OffsetDateTime;

const RULE_WIDTH: usize = 60;

/// Writes rendered reports as `<prefix>_<YYYYmmdd_HHMMSS>.txt`.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, mode: ReportMode, at: OffsetDateTime) -> PathBuf {
        self.dir
            .join(format!("{}_{}.txt", mode.file_prefix(), file_stamp(at)))
    }

    /// Create the directory if needed and write the report.
    pub fn write(&self, mode: ReportMode, at: OffsetDateTime, text: &str) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(mode, at);
        fs::write(&path, text)?;
        Ok(path)
    }
}

/// Report text framed by separator rules for the terminal.
pub fn framed(mode: ReportMode, text: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let title = match mode {
        ReportMode::Spot => "📊 COMPLETE MARKET REPORT",
        ReportMode::Closing => "📊 DAILY MARKET RECAP (CLOSING PRICES)",
    };
    format!("{rule}\n{title}\n{rule}\n{text}{rule}")
}
