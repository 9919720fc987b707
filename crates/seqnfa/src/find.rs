// Exhaustive sub-sequence search.
//
// `Find` slides the automaton over every start position of a haystack,
// driving one streaming run per suffix and yielding the matched slice for
// every length that run reports. Overlapping matches are all reported and
// nothing is cached across start positions, so the worst case is the number
// of start positions times the per-run cost.

use std::ops::Range;

use crate::NodeId;
use crate::graph::Graph;
use crate::run::Run;

/// One sub-sequence match: a `[start, end)` window into the haystack.
pub struct Match<'i, T> {
    haystack: &'i [T],
    start: usize,
    end: usize,
}

impl<'i, T> Match<'i, T> {
    /// Offset of the first matched item in the haystack.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last matched item.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched items themselves.
    pub fn as_slice(&self) -> &'i [T] {
        &self.haystack[self.start..self.end]
    }
}

impl<'i, T> Clone for Match<'i, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'i, T> Copy for Match<'i, T> {}

impl<'i, T: std::fmt::Debug> std::fmt::Debug for Match<'i, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("items", &self.as_slice())
            .finish()
    }
}

/// Lazy iterator over every sub-sequence of a haystack the automaton accepts.
///
/// Matches come out in ascending start order; for one start position, in the
/// order the underlying run reports lengths (ascending). A match never
/// advances the start past itself, so overlaps are all reported. Dropping the
/// iterator early is the only way to cut the search short.
pub struct Find<'g, 'i, T, L> {
    graph: &'g Graph<T, L>,
    entry: NodeId,
    haystack: &'i [T],
    start: usize,
    run: Run<'g, 'i, T, L>,
}

impl<'g, 'i, T, L> Find<'g, 'i, T, L> {
    pub(crate) fn new(graph: &'g Graph<T, L>, entry: NodeId, haystack: &'i [T]) -> Self {
        Find {
            graph,
            entry,
            haystack,
            start: 0,
            run: Run::new(graph, entry, haystack, false),
        }
    }
}

impl<'g, 'i, T, L: Clone> Iterator for Find<'g, 'i, T, L> {
    type Item = Match<'i, T>;

    fn next(&mut self) -> Option<Match<'i, T>> {
        loop {
            if let Some(length) = self.run.next() {
                return Some(Match {
                    haystack: self.haystack,
                    start: self.start,
                    end: self.start + length,
                });
            }
            self.start += 1;
            if self.start >= self.haystack.len() {
                return None;
            }
            self.run = Run::new(self.graph, self.entry, &self.haystack[self.start..], false);
        }
    }
}
