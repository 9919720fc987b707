// Streaming NFA simulation.
//
// `Run` drives the classic subset simulation: an active set of states,
// advanced once per input item by predicate transitions and re-closed over
// epsilon edges. It is an `Iterator` yielding the number of items consumed
// each time an accepting state becomes active (or, in must-match-all mode,
// once per accepting state after the whole input is consumed), so callers
// pull results on demand and may stop pulling at any point.

use hashbrown::HashMap;

use crate::NodeId;
use crate::active::ActiveSet;
use crate::closure::epsilon_closure_with;
use crate::graph::Graph;

/// How a node was most recently entered during a run: the source node and
/// the label of the transition taken. Epsilon entries are not recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<L> {
    pub from: NodeId,
    pub label: L,
}

/// A lazy run of the automaton over one input sequence.
///
/// Yields the count of items consumed so far, once per accepting node that is
/// active at that point. In must-match-all mode nothing is yielded until the
/// input is exhausted; otherwise every position where an accepting node
/// becomes active is reported. If several accepting nodes are active at the
/// same position, the offset is yielded once per node, in the order the nodes
/// entered the active set.
///
/// Two documented limitations, kept intentionally:
/// - an empty input yields nothing in either mode, even when the entry
///   node's epsilon closure already contains an accepting node (zero-length
///   accepts are never reported);
/// - once the active set empties, the run is over for good, regardless of
///   what the remaining input looks like.
///
/// The trace of how each node was last entered is kept per run (see
/// [`Run::trace`]); the shared graph itself is never touched, so any number
/// of runs may traverse one graph independently.
pub struct Run<'g, 'i, T, L> {
    graph: &'g Graph<T, L>,
    input: &'i [T],
    must_match_all: bool,
    current: ActiveSet,
    next: ActiveSet,
    /// Worklist buffer reused by every epsilon closure in this run.
    stack: Vec<NodeId>,
    trace: HashMap<NodeId, Step<L>>,
    /// Items consumed so far.
    pos: usize,
    /// Scan position in `current` while draining accepting-node emissions.
    cursor: usize,
    emitting: bool,
    /// Input exhausted in must-match-all mode; finish after the final drain.
    at_end: bool,
    done: bool,
}

impl<'g, 'i, T, L> Run<'g, 'i, T, L> {
    pub(crate) fn new(
        graph: &'g Graph<T, L>,
        entry: NodeId,
        input: &'i [T],
        must_match_all: bool,
    ) -> Self {
        let mut current = ActiveSet::new(graph.node_count());
        let mut stack = Vec::new();
        epsilon_closure_with(graph, entry, &mut current, &mut stack);
        log::trace!(
            "run start: {} input items, {} active after entry closure, must_match_all={}",
            input.len(),
            current.len(),
            must_match_all
        );
        Run {
            graph,
            input,
            must_match_all,
            next: ActiveSet::new(graph.node_count()),
            current,
            stack,
            trace: HashMap::new(),
            pos: 0,
            cursor: 0,
            emitting: false,
            at_end: false,
            // Zero-length accepts are never reported.
            done: input.is_empty(),
        }
    }

    /// How `id` was most recently entered during this run, if it was entered
    /// by a predicate transition at all. Later steps overwrite earlier
    /// entries for the same node; epsilon entries leave no trace.
    pub fn trace(&self, id: NodeId) -> Option<&Step<L>> {
        self.trace.get(&id)
    }

    /// Number of items consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl<'g, 'i, T, L: Clone> Run<'g, 'i, T, L> {
    /// Consume one input item: predicate transitions out of every active
    /// node, each target epsilon-closed into the next active set.
    fn step(&mut self) {
        let item = &self.input[self.pos];
        self.next.clear();
        for id in self.current.iter() {
            for t in self.graph.node(id).transitions() {
                if t.matches(item) {
                    // Last writer wins when several paths enter one node.
                    self.trace.insert(
                        t.target,
                        Step {
                            from: id,
                            label: t.label.clone(),
                        },
                    );
                    epsilon_closure_with(self.graph, t.target, &mut self.next, &mut self.stack);
                }
            }
        }
        std::mem::swap(&mut self.current, &mut self.next);
        self.pos += 1;
        log::trace!("run: item {} consumed, {} active", self.pos, self.current.len());
    }
}

impl<'g, 'i, T, L: Clone> Iterator for Run<'g, 'i, T, L> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.emitting {
                while let Some(id) = self.current.get(self.cursor) {
                    self.cursor += 1;
                    if self.graph.is_accepting(id) {
                        log::trace!("run: accept at offset {} (node {})", self.pos, id.index());
                        return Some(self.pos);
                    }
                }
                self.emitting = false;
                if self.at_end {
                    self.done = true;
                }
            }
            if self.done {
                return None;
            }
            if self.current.is_empty() {
                // Irrecoverably failed; remaining input cannot matter.
                self.done = true;
                return None;
            }
            if self.pos == self.input.len() {
                if self.must_match_all {
                    self.at_end = true;
                    self.emitting = true;
                    self.cursor = 0;
                    continue;
                }
                self.done = true;
                return None;
            }
            self.step();
            if !self.must_match_all {
                self.emitting = true;
                self.cursor = 0;
            }
        }
    }
}
