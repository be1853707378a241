//! Per-call visited markers for graph traversals.
//!
//! Markers are sized to the vertex count when a traversal starts and are never
//! stored on the graph itself, so concurrent read-only traversals of one graph
//! do not interfere.

/// A dense visited flag per vertex id.
#[derive(Debug, Clone, Default)]
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.flags.len()
    }

    /// Ids outside the marker array count as already visited, so they are
    /// never scheduled.
    #[inline(always)]
    pub(crate) fn is_visited(&self, idx: usize) -> bool {
        self.flags.get(idx).copied().unwrap_or(true)
    }

    #[inline(always)]
    pub(crate) fn mark(&mut self, idx: usize) {
        if let Some(flag) = self.flags.get_mut(idx) {
            *flag = true;
        }
    }

    /// Returns `true` iff `idx` was not yet visited, marking it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, idx: usize) -> bool {
        match self.flags.get_mut(idx) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }
}
