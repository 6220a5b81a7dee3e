//! Bounded log used by the demos for visible output.

use std::collections::VecDeque;

/// Entries kept when no capacity is configured.
pub const DEFAULT_LOG_CAPACITY: usize = 5;

/// Largest capacity a log accepts; bigger requests are clamped to it.
pub const MAX_LOG_CAPACITY: usize = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Keeps only the most recent `capacity` lines; older lines fall off the front.
pub struct DemoLog {
    capacity: usize,
    entries: VecDeque<String>,
}

impl DemoLog {
    /// Capacity is clamped to `1..=MAX_LOG_CAPACITY`; zero still shows the
    /// latest line. Storage grows with use, not with the requested capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.clamp(1, MAX_LOG_CAPACITY),
            entries: VecDeque::new(),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line.into());
    }

    /// Replace the contents with `lines`, keeping the tail if it overflows.
    pub fn replace<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.clear();
        for line in lines {
            self.push(line);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for DemoLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

/// Wall-clock stamp for log lines, `HH:MM:SS` in local time.
pub fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
