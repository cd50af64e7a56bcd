//! Command recall
//!
//! Submitted lines are kept newest-first, capped at [`MAX_HISTORY`]. The
//! cursor follows arrow-key navigation: Up walks back in time, Down walks
//! forward, and stepping past the newest entry clears the input line.

use serde::{Deserialize, Serialize};

/// Maximum number of recalled commands
pub const MAX_HISTORY: usize = 20;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandHistory {
    entries: Vec<String>,
    #[serde(skip)]
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line. Blank lines are ignored; the cursor resets.
    pub fn push(&mut self, line: &str) {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            self.entries.insert(0, line.to_string());
            self.entries.truncate(MAX_HISTORY);
        }
        self.cursor = None;
    }

    /// Step back in time (ArrowUp). From an idle cursor this recalls the
    /// newest entry; at the oldest entry it stays put.
    pub fn up(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(self.entries.len() - 1),
        };
        self.cursor = Some(next);
        Some(self.entries[next].as_str())
    }

    /// Step forward in time (ArrowDown). Past the newest entry the cursor
    /// goes idle and the line clears; with an idle cursor nothing happens.
    pub fn down(&mut self) -> Option<&str> {
        match self.cursor? {
            0 => {
                self.cursor = None;
                Some("")
            }
            i => {
                self.cursor = Some(i - 1);
                Some(self.entries[i - 1].as_str())
            }
        }
    }

    /// Drop the cursor back to idle (called whenever the user edits the line).
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
