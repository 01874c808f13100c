use std::collections::VecDeque;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Local};

/// Default cap on retained transcript entries.
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

/// Indentation for continuation lines, aligned under the "[HH:MM:SS] " column.
const CONTINUATION_INDENT: &str = "           ";

/// Direction of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// A command the operator sent
    Sent,
    /// Text the server returned (greeting or command response)
    Received,
    /// A client-side notice (connects, disconnects)
    Info,
}

impl Direction {
    /// Prefix used in the transcript view and in saved log files.
    pub fn prefix(self) -> &'static str {
        match self {
            Direction::Sent => "COMMAND: ",
            Direction::Received => "RESPONSE: ",
            Direction::Info => "",
        }
    }
}

/// One sent command, received response, or client-side notice.
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub timestamp: DateTime<Local>,
    pub direction: Direction,
    /// Raw text as sent or received; may span several lines
    pub text: String,
    /// Pre-computed formatted timestamp (HH:MM:SS)
    formatted_timestamp: String,
}

impl TranscriptEntry {
    pub fn new(direction: Direction, text: String) -> Self {
        Self::new_with_time(direction, text, Local::now())
    }

    /// Create an entry with a specific timestamp (for tests)
    pub fn new_with_time(direction: Direction, text: String, time: DateTime<Local>) -> Self {
        let formatted_timestamp = time.format("%H:%M:%S").to_string();
        Self {
            timestamp: time,
            direction,
            text,
            formatted_timestamp,
        }
    }

    pub fn formatted_timestamp(&self) -> &str {
        &self.formatted_timestamp
    }

    /// Render this entry as display lines: timestamp and direction prefix
    /// on the first line, continuation lines indented beneath it. Trailing
    /// newlines from the server do not produce empty lines.
    pub fn display_lines(&self) -> Vec<String> {
        let body = self.text.trim_end_matches('\n');
        body.split('\n')
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    format!(
                        "[{}] {}{}",
                        self.formatted_timestamp,
                        self.direction.prefix(),
                        line
                    )
                } else {
                    format!("{CONTINUATION_INDENT}{line}")
                }
            })
            .collect()
    }
}

/// A bounded buffer of transcript entries.
/// Once the cap is reached the oldest entry is evicted.
#[derive(Debug)]
pub struct Transcript {
    entries: VecDeque<TranscriptEntry>,
    max_entries: usize,
}

impl Transcript {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(1024)),
            max_entries,
        }
    }

    pub fn new_default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }

    pub fn push(&mut self, entry: TranscriptEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn record_sent(&mut self, text: impl Into<String>) {
        self.push(TranscriptEntry::new(Direction::Sent, text.into()));
    }

    pub fn record_received(&mut self, text: impl Into<String>) {
        self.push(TranscriptEntry::new(Direction::Received, text.into()));
    }

    pub fn record_info(&mut self, text: impl Into<String>) {
        self.push(TranscriptEntry::new(Direction::Info, text.into()));
    }

    pub fn entries(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Total number of display lines across all entries.
    /// The transcript view scrolls by line, not by entry.
    pub fn display_line_count(&self) -> usize {
        self.entries.iter().map(|e| e.display_lines().len()).sum()
    }

    /// Write the transcript to `path` as plain text, one display line per
    /// file line.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let mut file = File::create(path)
            .with_context(|| format!("could not create {}", path.display()))?;
        for entry in &self.entries {
            for line in entry.display_lines() {
                writeln!(file, "{line}")?;
            }
        }
        Ok(())
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(direction: Direction, text: &str) -> TranscriptEntry {
        let fixed_time = Local.with_ymd_and_hms(2024, 12, 10, 12, 0, 0).unwrap();
        TranscriptEntry::new_with_time(direction, text.to_string(), fixed_time)
    }

    #[test]
    fn test_push_and_len() {
        let mut transcript = Transcript::new(5);
        transcript.push(entry(Direction::Sent, "play"));
        transcript.push(entry(Direction::Received, "Starting program\n"));

        assert_eq!(transcript.len(), 2);
        assert!(!transcript.is_empty());
    }

    #[test]
    fn test_oldest_entry_is_evicted_at_cap() {
        let mut transcript = Transcript::new(2);
        transcript.push(entry(Direction::Sent, "play"));
        transcript.push(entry(Direction::Sent, "pause"));
        transcript.push(entry(Direction::Sent, "stop"));

        assert_eq!(transcript.len(), 2);
        let texts: Vec<&str> = transcript.entries().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["pause", "stop"]);
    }

    #[test]
    fn test_display_lines_single_line() {
        let e = entry(Direction::Sent, "robotmode");
        assert_eq!(e.display_lines(), vec!["[12:00:00] COMMAND: robotmode"]);
    }

    #[test]
    fn test_display_lines_strip_trailing_newline() {
        let e = entry(Direction::Received, "Robotmode: RUNNING\n");
        assert_eq!(
            e.display_lines(),
            vec!["[12:00:00] RESPONSE: Robotmode: RUNNING"]
        );
    }

    #[test]
    fn test_display_lines_multiline_response() {
        let e = entry(Direction::Received, "line one\nline two\n");
        let lines = e.display_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[12:00:00] RESPONSE: line one");
        assert_eq!(lines[1], format!("{CONTINUATION_INDENT}line two"));
    }

    #[test]
    fn test_info_entries_have_no_prefix() {
        let e = entry(Direction::Info, "Connecting to 10.0.0.2:29999");
        assert_eq!(
            e.display_lines(),
            vec!["[12:00:00] Connecting to 10.0.0.2:29999"]
        );
    }

    #[test]
    fn test_display_line_count_spans_entries() {
        let mut transcript = Transcript::new(10);
        transcript.push(entry(Direction::Sent, "programstate"));
        transcript.push(entry(Direction::Received, "STOPPED\nprog.urp\n"));

        assert_eq!(transcript.display_line_count(), 3);
    }

    #[test]
    fn test_save_to_file_round_trip() {
        let mut transcript = Transcript::new(10);
        transcript.push(entry(Direction::Info, "Connecting to 10.0.0.2:29999"));
        transcript.push(entry(Direction::Sent, "play"));
        transcript.push(entry(Direction::Received, "Starting program\n"));

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("session.txt");
        transcript.save_to_file(&path).unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            saved,
            "[12:00:00] Connecting to 10.0.0.2:29999\n\
             [12:00:00] COMMAND: play\n\
             [12:00:00] RESPONSE: Starting program\n"
        );
    }

    #[test]
    fn test_save_to_unwritable_path_errors() {
        let transcript = Transcript::new_default();
        let err = transcript
            .save_to_file(Path::new("/nonexistent-dir/session.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("could not create"));
    }

    #[test]
    fn test_clear() {
        let mut transcript = Transcript::new(10);
        transcript.push(entry(Direction::Sent, "play"));
        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.display_line_count(), 0);
    }
}
