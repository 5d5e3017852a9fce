//! Compact link type for arena-allocated ring nodes.

use std::fmt;

/// Index of a node slot inside a ring's arena.
///
/// Instead of pointer-based links, rings store indices into a `Vec` of nodes.
/// This keeps the cyclic structure free of aliasing and lifetime concerns, and
/// a `u32` link is half the size of a pointer on 64-bit platforms.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// Sentinel value indicating "no node" (analogous to a null pointer).
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    /// Largest number of slots an arena may hold; every valid index is below it.
    pub const MAX_SLOTS: usize = u32::MAX as usize;

    /// Converts a slot position to an index, or `None` if it does not fit
    /// below the sentinel.
    #[inline(always)]
    pub fn from_usize(i: usize) -> Option<NodeIndex> {
        u32::try_from(i)
            .ok()
            .filter(|&v| v != u32::MAX)
            .map(NodeIndex)
    }

    /// Converts this index to a `usize` for arena access.
    #[inline(always)]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` if this is the [`NONE`](NodeIndex::NONE) sentinel.
    #[inline(always)]
    pub fn is_none(self) -> bool {
        self == NodeIndex::NONE
    }
}

impl fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("NONE")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}
