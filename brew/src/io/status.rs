//! Destinations for action status lines.
//!
//! Actions report each step they perform through a [`StatusSink`]. The binary
//! prints to stdout; tests collect lines into a [`Transcript`] and compare.

/// Receives one human-readable line per executed action.
pub trait StatusSink {
    fn emit(&mut self, line: &str);
}

/// Prints each status line to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StatusSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Collects status lines in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl StatusSink for Transcript {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
