// The automaton handle.
//
// `Nfa` is a thin, copyable pair of graph reference and entry node. It holds
// no run state of its own: every call builds a fresh lazy run, and several
// handles (or clones of one) may share a graph and run independently.

use crate::NodeId;
use crate::find::Find;
use crate::graph::Graph;
use crate::run::Run;

/// Non-deterministic finite automaton over a shared state graph.
///
/// Models DFAs just as well when the wiring happens to be unambiguous and
/// epsilon-free. The handle is `Copy`; cloning it never clones the graph.
pub struct Nfa<'g, T, L> {
    graph: &'g Graph<T, L>,
    entry: NodeId,
}

impl<'g, T, L> Clone for Nfa<'g, T, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, T, L> Copy for Nfa<'g, T, L> {}

impl<'g, T, L> Nfa<'g, T, L> {
    /// Wrap a graph and its entry node. The entry must belong to `graph`;
    /// ids from another graph are not detected and traverse nonsense.
    pub fn new(graph: &'g Graph<T, L>, entry: NodeId) -> Self {
        Nfa { graph, entry }
    }

    pub fn graph(&self) -> &'g Graph<T, L> {
        self.graph
    }

    pub fn entry(&self) -> NodeId {
        self.entry
    }

    /// Lazily run the automaton over `input`, yielding consumed-item counts.
    ///
    /// With `must_match_all` set, nothing is yielded until the whole input is
    /// consumed; otherwise every position where an accepting node becomes
    /// active is reported as it is reached. See [`Run`] for the exact
    /// emission contract.
    pub fn run<'i>(&self, input: &'i [T], must_match_all: bool) -> Run<'g, 'i, T, L> {
        Run::new(self.graph, self.entry, input, must_match_all)
    }

    /// Lazily search `haystack` for every accepted sub-sequence, ascending by
    /// start offset, overlaps included. See [`Find`].
    pub fn find<'i>(&self, haystack: &'i [T]) -> Find<'g, 'i, T, L> {
        Find::new(self.graph, self.entry, haystack)
    }
}

impl<'g, T, L: Clone> Nfa<'g, T, L> {
    /// Whether some accepting path consumes the entire input.
    ///
    /// A prefix-only accept is `false`, and so is the empty input (even when
    /// the entry closure contains an accepting node; zero-length accepts are
    /// never reported).
    pub fn is_match(&self, input: &[T]) -> bool {
        matches!(self.run(input, true).next(), Some(n) if n == input.len())
    }
}
