//! Generic NFA engine for matching sequences of typed items.
//!
//! The engine simulates a non-deterministic finite automaton whose states
//! are connected by predicate-labeled transitions and silent (epsilon)
//! edges. It is generic over the item type: all item-specific behavior lives
//! in the predicates a collaborator compiles into the graph, never in the
//! engine. Typical use is matching token streams in an NLP pipeline, but any
//! finite ordered sequence works.
//!
//! Three operations, all lazy where a sequence of results is produced:
//!
//! - [`Nfa::run`] -- streaming run-length discovery: yields how many items
//!   were consumed each time an accepting state becomes active;
//! - [`Nfa::is_match`] -- whole-sequence acceptance test;
//! - [`Nfa::find`] -- exhaustive sub-sequence search over a haystack,
//!   overlaps included.
//!
//! # Architecture
//!
//! - [`graph`] -- arena-based state graph ([`Graph`], [`Node`], [`Transition`])
//! - [`active`] -- sparse active-state set with insertion-order iteration
//! - [`closure`] -- iterative epsilon-closure expansion
//! - [`run`] -- streaming simulation ([`Run`]) with a per-run trace map
//! - [`find`] -- sub-sequence search ([`Find`], [`Match`])
//! - [`nfa`] -- the thin [`Nfa`] handle tying the operations together
//!
//! # Example
//!
//! ```
//! use seqnfa::{Graph, Nfa};
//!
//! // Accepts exactly the sequence 'a' 'b'.
//! let mut graph: Graph<char, &str> = Graph::new();
//! let s0 = graph.add_node();
//! let s1 = graph.add_node();
//! let s2 = graph.add_accepting();
//! graph.add_transition(s0, "a", |c: &char| *c == 'a', s1);
//! graph.add_transition(s1, "b", |c: &char| *c == 'b', s2);
//!
//! let nfa = Nfa::new(&graph, s0);
//! assert!(nfa.is_match(&['a', 'b']));
//! assert!(!nfa.is_match(&['a', 'b', 'a']));
//!
//! let hay: Vec<char> = "aabab".chars().collect();
//! let starts: Vec<usize> = nfa.find(&hay).map(|m| m.start()).collect();
//! assert_eq!(starts, [1, 3]);
//! ```
//!
//! The engine raises no errors of its own: "no match" is the absence of a
//! yielded value, never a failure. It also does not validate graph wiring;
//! a malformed graph is the builder's problem and shows up as surprising
//! traversal, not as a reported error.

pub mod active;
pub mod closure;
pub mod find;
pub mod graph;
pub mod nfa;
pub mod run;

pub use active::ActiveSet;
pub use closure::epsilon_closure;
pub use find::{Find, Match};
pub use graph::{Graph, Node, Transition};
pub use nfa::Nfa;
pub use run::{Run, Step};

/// Identifier of one node in a [`Graph`] arena.
///
/// Plain index, freely copyable; equality and hashing are by identity (two
/// ids are the same node iff they are equal and come from the same graph).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of the node in its graph's arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
