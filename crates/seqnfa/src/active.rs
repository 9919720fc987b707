// Sparse set of active nodes.
//
// The run loop needs a set it can clear between input items without paying
// for the clear, and it needs a reproducible iteration order so that the
// emission order for simultaneously accepting nodes is deterministic. A
// sparse set (dense array + index array, after research.swtch.com/sparse)
// gives O(1) insert, membership and clear with insertion-order iteration,
// at the cost of 2x node-count memory, which the graph knows up front.

use crate::NodeId;

/// Ordered set of `NodeId`s with O(1) insert, membership test and clear.
///
/// Capacity is fixed at construction; members must index below it.
/// Iteration visits members in insertion order.
#[derive(Clone)]
pub struct ActiveSet {
    len: usize,
    /// Members in insertion order; only `dense[..len]` is meaningful.
    dense: Vec<NodeId>,
    /// For node index i, `sparse[i]` is its position in `dense` (if a member).
    sparse: Vec<u32>,
}

impl ActiveSet {
    /// Create an empty set able to hold node indices in `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        ActiveSet {
            len: 0,
            dense: vec![NodeId(0); capacity],
            sparse: vec![0; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.dense.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a node. Returns `true` if it was not already a member.
    #[inline]
    pub fn insert(&mut self, id: NodeId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.sparse[id.index()] = self.len as u32;
        self.dense[self.len] = id;
        self.len += 1;
        true
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        let slot = self.sparse[id.index()] as usize;
        slot < self.len && self.dense[slot] == id
    }

    /// Member at position `i` in insertion order.
    #[inline]
    pub fn get(&self, i: usize) -> Option<NodeId> {
        if i < self.len { Some(self.dense[i]) } else { None }
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.dense[..self.len].iter().copied()
    }

    /// Empty the set. O(1): only the length is reset.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl std::fmt::Debug for ActiveSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
