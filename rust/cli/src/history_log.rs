//! Rotating JSONL hand history.
//!
//! One [`HandHistory`] per line, LF terminated. The file never holds more
//! than `cap` entries: appending past the cap drops the oldest lines.

use std::fs::{self, File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bonusholdem_engine::history::HandHistory;
use chrono::{SecondsFormat, Utc};

pub struct HistoryLog {
    path: PathBuf,
    cap: usize,
}

impl HistoryLog {
    pub fn open<P: AsRef<Path>>(path: P, cap: usize) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        Ok(Self {
            path,
            cap: cap.max(1),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&mut self, record: &HandHistory) -> std::io::Result<()> {
        self.append_all(std::slice::from_ref(record))
    }

    /// Appends several records with a single rewrite of the file.
    pub fn append_all(&mut self, records: &[HandHistory]) -> std::io::Result<()> {
        let mut lines = self.read_lines()?;
        for record in records {
            let mut rec = record.clone();
            if rec.ts.is_none() {
                rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
            }
            lines.push(rec.to_json_line().map_err(std::io::Error::other)?);
        }
        let skip = lines.len().saturating_sub(self.cap);

        // the live file is only replaced once the new content is fully written
        let tmp = self.tmp_path();
        let written = write_lines(&tmp, &lines[skip..]);
        if let Err(e) = written.and_then(|()| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    pub fn read_all(&self) -> std::io::Result<Vec<HandHistory>> {
        self.read_lines()?
            .iter()
            .map(|line| HandHistory::from_json_line(line).map_err(std::io::Error::other))
            .collect()
    }

    fn read_lines(&self) -> std::io::Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string)
                .collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }
}

fn write_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for line in lines {
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    w.get_ref().sync_all()
}
