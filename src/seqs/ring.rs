//! Character sequence stored as a circular singly-linked list.
//!
//! # Implementation details
//! - **Arena**: nodes live in a `Vec<Node>` and link to each other through
//!   [`NodeIndex`] handles rather than pointers, so the cycle needs no shared
//!   ownership.
//! - **Closure**: while the ring is non-empty the tail's `next` is always the
//!   head; following `next` exactly `len()` times from the head returns to it.
//! - **Free list**: slots released by deletions are chained through their
//!   `next` links and reused by later insertions. Whenever the ring becomes
//!   empty the arena is truncated, so an empty ring owns no nodes.
//! - **No cached length**: `len()` walks the chain on every call.

use std::fmt;

use log::{debug, trace};

use crate::error::Result;
use crate::sequence::{check_access_index, check_insert_index, validate_element, AnySequence};
use crate::utils::node_index::NodeIndex;

/// A single arena slot. Live slots belong to the ring; released slots are
/// chained on the free list through `next`.
#[derive(Clone, Copy, Debug)]
struct Node {
    data: char,
    next: NodeIndex,
}

/// An ordered character sequence stored as a circular singly-linked list.
///
/// The ring only remembers its head. The tail is found by walking until a
/// node links back to the head, which is what keeps `append`, insertion at
/// the front and deletion at the front linear in the length.
///
/// # Shape
/// | State | Condition |
/// |-------|-----------|
/// | Empty | `head == NONE`, no nodes allocated |
/// | Single | `head.next == head` |
/// | Multi | two or more nodes |
///
/// # Panics
/// Operations that allocate a node panic if the arena would need more than
/// `u32::MAX - 1` slots.
pub struct SequenceRing {
    nodes: Vec<Node>,
    head: NodeIndex,
    free_head: NodeIndex,
}

impl SequenceRing {
    /// Creates a new empty ring.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: NodeIndex::NONE,
            free_head: NodeIndex::NONE,
        }
    }

    /// Returns the number of elements by walking the chain once. O(n).
    ///
    /// # Pseudo Code:
    /// ```text
    /// if head == NONE: return 0
    /// count = 1, curr = head
    /// while next(curr) != head:
    ///     count += 1
    ///     curr = next(curr)
    /// return count
    /// ```
    pub fn len(&self) -> usize {
        if self.head.is_none() {
            return 0;
        }
        let mut count = 1;
        let mut curr = self.head;
        while self.next_of(curr) != self.head {
            count += 1;
            curr = self.next_of(curr);
        }
        count
    }

    /// Returns `true` if the ring contains no elements. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterates over the elements from head back around to the tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            ring: self,
            curr: self.head,
        }
    }

    /// Appends an already validated character.
    ///
    /// # Pseudo Code:
    /// ```text
    /// idx = alloc(ch)
    /// if head == NONE:
    ///     next(idx) = idx
    ///     head = idx
    /// else:
    ///     tail = find_tail()
    ///     next(tail) = idx
    ///     next(idx) = head
    /// ```
    pub fn push(&mut self, ch: char) {
        let idx = self.alloc(ch);
        if self.head.is_none() {
            self.set_next(idx, idx);
            self.head = idx;
            trace!("ring: {idx:?} becomes self-linked head");
        } else {
            let tail = self.find_tail();
            self.set_next(tail, idx);
            self.set_next(idx, self.head);
            trace!("ring: spliced {idx:?} after tail {tail:?}");
        }
        self.check_invariants();
    }

    pub fn append(&mut self, element: &str) -> Result<()> {
        let ch = validate_element(element)?;
        self.push(ch);
        Ok(())
    }

    /// Inserts `element` so that it becomes the element at `index`.
    ///
    /// # Pseudo Code:
    /// ```text
    /// validate element, then 0 <= index <= len
    /// if index == 0:
    ///     if empty: push(ch)
    ///     else:
    ///         tail = find_tail()
    ///         next(new) = head
    ///         head = new
    ///         next(tail) = head
    /// else:
    ///     prev = walk(index - 1)
    ///     next(new) = next(prev)
    ///     next(prev) = new
    /// ```
    pub fn insert(&mut self, element: &str, index: usize) -> Result<()> {
        let ch = validate_element(element)?;
        check_insert_index(index, self.len())?;

        if index == 0 {
            if self.head.is_none() {
                self.push(ch);
                return Ok(());
            }
            let tail = self.find_tail();
            let idx = self.alloc(ch);
            self.set_next(idx, self.head);
            self.head = idx;
            self.set_next(tail, idx);
            trace!("ring: {idx:?} inserted as head, tail {tail:?} relinked");
        } else {
            let prev = self.walk(index - 1);
            let idx = self.alloc(ch);
            self.set_next(idx, self.next_of(prev));
            self.set_next(prev, idx);
            trace!("ring: spliced {idx:?} after {prev:?}");
        }
        self.check_invariants();
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<char> {
        check_access_index(index, self.len())?;
        Ok(self.data_of(self.walk(index)))
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Pseudo Code:
    /// ```text
    /// validate 0 <= index < len
    /// if next(head) == head:            // sole element
    ///     data = data(head); reset(); return data
    /// if index == 0:
    ///     tail = find_tail()
    ///     old = head
    ///     head = next(old)
    ///     next(tail) = head
    ///     release(old)
    /// else:
    ///     prev = walk(index - 1)
    ///     victim = next(prev)
    ///     next(prev) = next(victim)
    ///     release(victim)
    /// ```
    pub fn delete(&mut self, index: usize) -> Result<char> {
        check_access_index(index, self.len())?;

        if self.next_of(self.head) == self.head {
            let data = self.data_of(self.head);
            self.reset();
            return Ok(data);
        }

        let data = if index == 0 {
            let tail = self.find_tail();
            let old = self.head;
            self.head = self.next_of(old);
            self.set_next(tail, self.head);
            trace!("ring: head advanced {old:?} -> {:?}", self.head);
            self.release(old)
        } else {
            let prev = self.walk(index - 1);
            let victim = self.next_of(prev);
            self.set_next(prev, self.next_of(victim));
            trace!("ring: unlinked {victim:?} after {prev:?}");
            self.release(victim)
        };
        self.check_invariants();
        Ok(data)
    }

    /// Removes every occurrence of `element`.
    ///
    /// # Pseudo Code:
    /// ```text
    /// if empty: return
    /// tail = find_tail()
    /// while data(head) == ch:
    ///     if next(head) == head: reset(); return
    ///     old = head
    ///     head = next(old)
    ///     next(tail) = head
    ///     release(old)
    /// curr = head
    /// while next(curr) != head:
    ///     n = next(curr)
    ///     if data(n) == ch:
    ///         next(curr) = next(n)
    ///         release(n)
    ///     else:
    ///         curr = n
    /// ```
    pub fn delete_all(&mut self, element: &str) -> Result<()> {
        let ch = validate_element(element)?;
        if self.head.is_none() {
            return Ok(());
        }

        // The tail stays the same node while matches are removed from the front.
        let tail = self.find_tail();
        while self.data_of(self.head) == ch {
            if self.next_of(self.head) == self.head {
                self.reset();
                return Ok(());
            }
            let old = self.head;
            self.head = self.next_of(old);
            self.set_next(tail, self.head);
            self.release(old);
        }

        let mut curr = self.head;
        while self.next_of(curr) != self.head {
            let n = self.next_of(curr);
            if self.data_of(n) == ch {
                self.set_next(curr, self.next_of(n));
                self.release(n);
            } else {
                curr = n;
            }
        }
        self.check_invariants();
        Ok(())
    }

    /// Reverses the ring in place.
    ///
    /// # Pseudo Code:
    /// ```text
    /// if len <= 1: return
    /// prev = NONE, curr = head
    /// loop:
    ///     n = next(curr)
    ///     next(curr) = prev
    ///     prev = curr
    ///     curr = n
    ///     if curr == head: break
    /// next(head) = prev      // old head is the new tail
    /// head = prev
    /// ```
    pub fn reverse(&mut self) {
        if self.head.is_none() || self.next_of(self.head) == self.head {
            return;
        }

        let mut prev = NodeIndex::NONE;
        let mut curr = self.head;
        loop {
            let n = self.next_of(curr);
            self.set_next(curr, prev);
            prev = curr;
            curr = n;
            if curr == self.head {
                break;
            }
        }
        self.set_next(self.head, prev);
        trace!("ring: reversed, head {:?} -> {prev:?}", self.head);
        self.head = prev;
        self.check_invariants();
    }

    pub fn find_first(&self, element: &str) -> Result<Option<usize>> {
        let ch = validate_element(element)?;
        Ok(self.iter().position(|item| item == ch))
    }

    pub fn find_last(&self, element: &str) -> Result<Option<usize>> {
        let ch = validate_element(element)?;
        let mut last = None;
        for (i, item) in self.iter().enumerate() {
            if item == ch {
                last = Some(i);
            }
        }
        Ok(last)
    }

    pub fn clear(&mut self) {
        debug!("ring: clearing, releasing {} slots", self.nodes.len());
        self.reset();
    }

    /// Appends a copy of every element of `other`. `other` is only read.
    pub fn extend_from(&mut self, other: &SequenceRing) {
        for ch in other.iter() {
            self.push(ch);
        }
    }

    /// Returns `true` if the ring is structurally sound: an empty ring owns no
    /// slots, a non-empty ring closes back on its head, and every arena slot
    /// is either reachable from the head or on the free list.
    pub fn is_well_formed(&self) -> bool {
        if self.head.is_none() {
            return self.nodes.is_empty() && self.free_head.is_none();
        }
        if self.head.as_usize() >= self.nodes.len() {
            return false;
        }

        // Walk at most `nodes.len()` links; a closed ring gets back to head.
        let mut live = 1;
        let mut curr = self.next_of(self.head);
        while curr != self.head {
            if curr.is_none() || curr.as_usize() >= self.nodes.len() || live >= self.nodes.len() {
                return false;
            }
            live += 1;
            curr = self.next_of(curr);
        }

        let mut free = 0;
        let mut curr = self.free_head;
        while !curr.is_none() {
            if curr.as_usize() >= self.nodes.len() || free >= self.nodes.len() {
                return false;
            }
            free += 1;
            curr = self.next_of(curr);
        }
        live + free == self.nodes.len()
    }

    #[cfg(feature = "check-invariants")]
    fn check_invariants(&self) {
        assert!(
            self.is_well_formed(),
            "SequenceRing invariant violated: head {:?}, free {:?}, {} slots",
            self.head,
            self.free_head,
            self.nodes.len()
        );
    }

    #[cfg(not(feature = "check-invariants"))]
    #[inline(always)]
    fn check_invariants(&self) {}

    #[inline(always)]
    fn next_of(&self, idx: NodeIndex) -> NodeIndex {
        self.nodes[idx.as_usize()].next
    }

    #[inline(always)]
    fn set_next(&mut self, idx: NodeIndex, next: NodeIndex) {
        self.nodes[idx.as_usize()].next = next;
    }

    #[inline(always)]
    fn data_of(&self, idx: NodeIndex) -> char {
        self.nodes[idx.as_usize()].data
    }

    /// Walks `steps` links from head. The caller guarantees a non-empty ring.
    fn walk(&self, steps: usize) -> NodeIndex {
        let mut curr = self.head;
        for _ in 0..steps {
            curr = self.next_of(curr);
        }
        curr
    }

    /// Returns the node whose `next` is head. The caller guarantees a non-empty ring.
    fn find_tail(&self) -> NodeIndex {
        let mut curr = self.head;
        while self.next_of(curr) != self.head {
            curr = self.next_of(curr);
        }
        curr
    }

    /// Takes a slot from the free list, or grows the arena. The new node is unlinked.
    fn alloc(&mut self, data: char) -> NodeIndex {
        if !self.free_head.is_none() {
            let idx = self.free_head;
            self.free_head = self.next_of(idx);
            self.nodes[idx.as_usize()] = Node {
                data,
                next: NodeIndex::NONE,
            };
            return idx;
        }
        let Some(idx) = NodeIndex::from_usize(self.nodes.len()) else {
            panic!(
                "SequenceRing arena exhausted: at most {} nodes",
                NodeIndex::MAX_SLOTS - 1
            );
        };
        self.nodes.push(Node {
            data,
            next: NodeIndex::NONE,
        });
        idx
    }

    /// Returns an unlinked slot to the free list and yields its payload.
    fn release(&mut self, idx: NodeIndex) -> char {
        let data = self.data_of(idx);
        self.set_next(idx, self.free_head);
        self.free_head = idx;
        data
    }

    /// Drops every node and returns to the empty state.
    fn reset(&mut self) {
        trace!("ring: reset, {} slots dropped", self.nodes.len());
        self.nodes.clear();
        self.head = NodeIndex::NONE;
        self.free_head = NodeIndex::NONE;
    }
}

impl Default for SequenceRing {
    fn default() -> Self {
        Self::new()
    }
}

impl AnySequence for SequenceRing {
    fn len(&self) -> usize {
        self.len()
    }
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
    fn append(&mut self, element: &str) -> Result<()> {
        self.append(element)
    }
    fn insert(&mut self, element: &str, index: usize) -> Result<()> {
        self.insert(element, index)
    }
    fn get(&self, index: usize) -> Result<char> {
        self.get(index)
    }
    fn delete(&mut self, index: usize) -> Result<char> {
        self.delete(index)
    }
    fn delete_all(&mut self, element: &str) -> Result<()> {
        self.delete_all(element)
    }
    fn reverse(&mut self) {
        self.reverse();
    }
    fn find_first(&self, element: &str) -> Result<Option<usize>> {
        self.find_first(element)
    }
    fn find_last(&self, element: &str) -> Result<Option<usize>> {
        self.find_last(element)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn extend_from(&mut self, other: &Self) {
        self.extend_from(other);
    }
    fn to_vec(&self) -> Vec<char> {
        self.iter().collect()
    }
}

/// Deep copy: walks the source and pushes every element into a fresh,
/// compact arena. Free slots of the source are not carried over.
impl Clone for SequenceRing {
    fn clone(&self) -> Self {
        let mut cloned = SequenceRing::new();
        cloned.nodes.reserve(self.nodes.len());
        cloned.extend(self.iter());
        cloned
    }
}

impl fmt::Debug for SequenceRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for SequenceRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|ch| fmt::Write::write_char(f, ch))
    }
}

impl PartialEq for SequenceRing {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}
impl Eq for SequenceRing {}

impl Extend<char> for SequenceRing {
    /// Appends each character. Finds the tail once and keeps splicing after it.
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        let mut iter = iter.into_iter();
        let mut tail = if self.head.is_none() {
            match iter.next() {
                Some(ch) => {
                    self.push(ch);
                    self.head
                }
                None => return,
            }
        } else {
            self.find_tail()
        };
        for ch in iter {
            let idx = self.alloc(ch);
            self.set_next(idx, self.head);
            self.set_next(tail, idx);
            tail = idx;
        }
        self.check_invariants();
    }
}

impl FromIterator<char> for SequenceRing {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut ring = Self::new();
        ring.extend(iter);
        ring
    }
}

impl From<&str> for SequenceRing {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

/// Iterator over the characters of a [`SequenceRing`], head first.
pub struct Iter<'a> {
    ring: &'a SequenceRing,
    curr: NodeIndex,
}

impl<'a> Iterator for Iter<'a> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.curr.is_none() {
            return None;
        }
        let node = self.ring.nodes[self.curr.as_usize()];
        self.curr = if node.next == self.ring.head {
            NodeIndex::NONE
        } else {
            node.next
        };
        Some(node.data)
    }
}

impl<'a> IntoIterator for &'a SequenceRing {
    type Item = char;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
