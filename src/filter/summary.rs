use std::fmt;

/// Count line shown above the result grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub count: usize,
}

impl ResultSummary {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// An empty result is a normal outcome; the view shows its empty state.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.count == 1 { "item" } else { "items" };
        write!(f, "Showing {} {}", self.count, noun)
    }
}
