// Epsilon-closure expansion.
//
// Expands a set of active nodes with everything reachable over zero or more
// silent edges. The expansion is iterative (explicit worklist, no recursion)
// so arbitrarily deep epsilon chains cannot overflow the stack, and the
// visited guard is membership in the output set itself, which bounds the
// work by the number of distinct nodes even on cyclic epsilon graphs.

use crate::NodeId;
use crate::active::ActiveSet;
use crate::graph::Graph;

/// Insert `start` and everything epsilon-reachable from it into `set`.
///
/// If `start` is already a member the call returns immediately, which makes
/// the operation idempotent on an already-closed set. Terminates in
/// O(distinct nodes) regardless of epsilon-cycle structure.
pub fn epsilon_closure<T, L>(graph: &Graph<T, L>, start: NodeId, set: &mut ActiveSet) {
    let mut stack = Vec::new();
    epsilon_closure_with(graph, start, set, &mut stack);
}

/// Like [`epsilon_closure`], reusing a caller-provided worklist buffer.
///
/// The run loop closes many nodes per input item; reusing one buffer avoids
/// an allocation per closed node. `stack` must be empty on entry and is left
/// empty on return.
pub(crate) fn epsilon_closure_with<T, L>(
    graph: &Graph<T, L>,
    start: NodeId,
    set: &mut ActiveSet,
    stack: &mut Vec<NodeId>,
) {
    debug_assert!(stack.is_empty());
    if !set.insert(start) {
        return;
    }
    stack.push(start);
    while let Some(id) = stack.pop() {
        for &eps in graph.node(id).epsilon() {
            if set.insert(eps) {
                stack.push(eps);
            }
        }
    }
}
