//! State carried from one cycle to the next.

use super::model::SerialLine;

/// The only value that outlives a cycle: the line the next upload sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleState {
    pending_line: SerialLine,
    completed: u64,
}

impl Default for CycleState {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleState {
    pub fn new() -> Self {
        Self {
            pending_line: SerialLine::initial(),
            completed: 0,
        }
    }

    /// Line the upload step will send.
    pub fn pending_line(&self) -> &SerialLine {
        &self.pending_line
    }

    /// Replace the pending line with a fresh serial read.
    pub fn store_line(&mut self, line: SerialLine) {
        self.pending_line = line;
    }

    /// Mark the current cycle finished; returns its 1-based number.
    pub fn complete(&mut self) -> u64 {
        self.completed += 1;
        self.completed
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }
}
