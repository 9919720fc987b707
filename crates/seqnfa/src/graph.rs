// Arena-based state graph for the NFA engine.
//
// States live in a single `Graph` arena and refer to each other by `NodeId`
// index, so the graph may be freely cyclic (including epsilon cycles) without
// ownership gymnastics. Node identity is the arena index: two ids name the
// same node iff they are equal and come from the same graph.

use crate::NodeId;

/// A predicate-labeled transition out of a node.
///
/// The predicate decides whether one input item lets the automaton take this
/// edge; the label is an opaque match-descriptor supplied by whoever compiled
/// the predicate (it is recorded in the per-run trace so paths can be
/// reconstructed afterwards). The engine never inspects the label.
pub struct Transition<T, L> {
    /// Match-descriptor attached to this edge.
    pub label: L,
    predicate: Box<dyn Fn(&T) -> bool>,
    /// State entered when the predicate accepts an item.
    pub target: NodeId,
}

impl<T, L> Transition<T, L> {
    pub fn new(label: L, predicate: impl Fn(&T) -> bool + 'static, target: NodeId) -> Self {
        Transition {
            label,
            predicate: Box::new(predicate),
            target,
        }
    }

    /// Evaluate the predicate against one input item.
    ///
    /// Predicates are required to be total over the item type and free of
    /// side effects on the automaton itself; if one panics, the panic
    /// propagates to the caller unmodified.
    #[inline]
    pub fn matches(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

/// One state of the automaton.
///
/// Holds an ordered epsilon-adjacency list, an ordered transition list and an
/// accepting flag. A fresh node has no edges and is not accepting. Orderings
/// are preserved: transitions are tried in the order they were added, which
/// fixes the emission order when several paths accept at the same position.
pub struct Node<T, L> {
    epsilon: Vec<NodeId>,
    transitions: Vec<Transition<T, L>>,
    accepting: bool,
}

impl<T, L> Node<T, L> {
    /// A node with no edges that is not accepting.
    pub fn new() -> Self {
        Node {
            epsilon: Vec::new(),
            transitions: Vec::new(),
            accepting: false,
        }
    }

    /// A node with no edges that is accepting.
    pub fn accepting() -> Self {
        Node {
            accepting: true,
            ..Node::new()
        }
    }

    /// Silent edges, in insertion order.
    pub fn epsilon(&self) -> &[NodeId] {
        &self.epsilon
    }

    /// Predicate transitions, in insertion order.
    pub fn transitions(&self) -> &[Transition<T, L>] {
        &self.transitions
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    pub fn push_epsilon(&mut self, to: NodeId) {
        self.epsilon.push(to);
    }

    pub fn push_transition(&mut self, transition: Transition<T, L>) {
        self.transitions.push(transition);
    }
}

impl<T, L> Default for Node<T, L> {
    fn default() -> Self {
        Node::new()
    }
}

/// The arena owning every node of one automaton graph.
///
/// Built once by the collaborator that compiled the pattern, then shared
/// read-only with any number of [`Nfa`](crate::Nfa) handles. The graph is
/// never mutated by a run, so independent runs over one graph cannot
/// interfere with each other.
///
/// The engine does not validate wiring. A `NodeId` obtained from a different
/// graph (or otherwise out of range) panics on index access like any slice
/// misuse; edges to nonsense targets simply traverse to whatever node the
/// index names.
pub struct Graph<T, L> {
    nodes: Vec<Node<T, L>>,
}

impl<T, L> Graph<T, L> {
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    /// Add a pre-built node, returning its id.
    pub fn add(&mut self, node: Node<T, L>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Add a fresh empty, non-accepting node.
    pub fn add_node(&mut self) -> NodeId {
        self.add(Node::new())
    }

    /// Add a fresh accepting node with no edges.
    pub fn add_accepting(&mut self) -> NodeId {
        self.add(Node::accepting())
    }

    /// Wire a silent edge `from -> to`.
    pub fn add_epsilon(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from.index()].epsilon.push(to);
    }

    /// Wire a predicate transition `from -> to`.
    pub fn add_transition(
        &mut self,
        from: NodeId,
        label: L,
        predicate: impl Fn(&T) -> bool + 'static,
        to: NodeId,
    ) {
        self.nodes[from.index()]
            .transitions
            .push(Transition::new(label, predicate, to));
    }

    /// Set or clear the accepting flag of a node.
    pub fn set_accepting(&mut self, id: NodeId, accepting: bool) {
        self.nodes[id.index()].accepting = accepting;
    }

    pub fn is_accepting(&self, id: NodeId) -> bool {
        self.nodes[id.index()].accepting
    }

    pub fn node(&self, id: NodeId) -> &Node<T, L> {
        &self.nodes[id.index()]
    }

    /// Number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Ids of every node, in arena order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| NodeId(i as u32))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T, L> Default for Graph<T, L> {
    fn default() -> Self {
        Graph::new()
    }
}

// Predicates are not Debug, so summarize counts instead of contents.
impl<T, L> std::fmt::Debug for Graph<T, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let transition_count: usize = self.nodes.iter().map(|n| n.transitions.len()).sum();
        let epsilon_count: usize = self.nodes.iter().map(|n| n.epsilon.len()).sum();
        let accepting_count = self.nodes.iter().filter(|n| n.accepting).count();
        f.debug_struct("Graph")
            .field("node_count", &self.nodes.len())
            .field("transition_count", &transition_count)
            .field("epsilon_count", &epsilon_count)
            .field("accepting_count", &accepting_count)
            .finish()
    }
}
