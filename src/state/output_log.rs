// Rolling output shown under each demo.

use std::collections::VecDeque;
use std::fmt;

/// Number of lines the output area keeps by default.
pub const DEFAULT_MAX_OUTPUTS: usize = 5;

/// Bounded FIFO of human-readable messages. Oldest lines are evicted first.
#[derive(Debug, Clone)]
pub struct OutputLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl OutputLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        log::debug!(line:% = line; "output");
        self.lines.push_back(line);
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for OutputLog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_OUTPUTS)
    }
}

impl fmt::Display for OutputLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_last_five() {
        let mut log = OutputLog::default();
        for i in 0..7 {
            log.push(format!("line {i}"));
        }

        let lines: Vec<_> = log.lines().collect();
        assert_eq!(lines, vec!["line 2", "line 3", "line 4", "line 5", "line 6"]);
        assert_eq!(log.latest(), Some("line 6"));
    }

    #[test]
    fn test_display_joins_lines() {
        let mut log = OutputLog::new(2);
        log.push("a");
        log.push("b");
        log.push("c");
        assert_eq!(log.to_string(), "b\nc");
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut log = OutputLog::new(0);
        log.push("dropped");
        assert!(log.is_empty());
    }
}
