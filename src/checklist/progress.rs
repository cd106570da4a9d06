use serde::Serialize;
use std::fmt;

/// Completed and total item counts for a category or the whole checklist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// `round(100 * completed / total)` with halves rounded up, 0 for an empty total
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let scaled = (200 * self.completed + self.total) / (2 * self.total);
        scaled as u32
    }

    /// Every item is done; an empty group counts as complete
    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)
    }
}
