//! Per-line pool of actual comments awaiting a match.

/// Actual comments on one line, in engine order, not yet consumed by an
/// expected substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPool {
    remaining: Vec<String>,
}

impl CommentPool {
    pub fn new(comments: &[String]) -> Self {
        Self {
            remaining: comments.to_vec(),
        }
    }

    /// Remove and return the first comment containing `needle`.
    pub fn take_containing(&mut self, needle: &str) -> Option<String> {
        let index = self.remaining.iter().position(|c| c.contains(needle))?;
        Some(self.remaining.remove(index))
    }

    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn into_remaining(self) -> Vec<String> {
        self.remaining
    }
}
