use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::iterator::Cursor;
use crate::list::{IntList, check_element, check_position};
use crate::types::{Index, NOT_FOUND, Value};

/// Handle of a node in the arena.
type NodeId = usize;

/// Front sentinel. Always `nodes[0]`.
const FRONT: NodeId = 0;
/// Back sentinel. Always `nodes[1]`.
const BACK: NodeId = 1;
/// Link value of a node that is not in the chain.
const NIL: NodeId = usize::MAX;

/// A single slot in the arena: one value and its two neighbours.
#[derive(Debug, Clone, Copy)]
struct Node {
    value: Value,
    prev: NodeId,
    next: NodeId,
}

impl Node {
    const UNLINKED: Node = Node {
        value: 0,
        prev: NIL,
        next: NIL,
    };
}

/// Doubly linked integer list bracketed by two permanent sentinels.
///
/// Nodes live in an arena and refer to each other by handle, so there are
/// no owning cycles and a removed node's slot is recycled through the free
/// list instead of being freed.
///
/// ```text
///  handle:   0                              1
///         [FRONT] ⇄ [ 7 ] ⇄ [ 3 ] ⇄ [ 9 ] ⇄ [BACK]
///                   nodes[4] nodes[2] nodes[5]        free: [3]
/// ```
///
/// The sentinels never hold data, never move, and never reach the free list.
/// Because every data node has a real neighbour on both sides, splicing at
/// either end needs no special case.
pub struct SentinelList {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    len: usize,
}

impl SentinelList {
    /// Empty list: `FRONT.next == BACK` and `BACK.prev == FRONT`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Empty list with arena room for `capacity` data nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 2);
        nodes.push(Node {
            value: 0,
            prev: NIL,
            next: BACK,
        });
        nodes.push(Node {
            value: 0,
            prev: FRONT,
            next: NIL,
        });
        SentinelList {
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Verify the chain and arena bookkeeping.
    ///
    /// Walks `FRONT -> BACK` checking that every `next` hop is mirrored by the
    /// matching `prev` link, that the walk visits exactly `len` data nodes,
    /// and that the free list only holds unlinked, non-sentinel handles.
    pub fn check_invariants(&self) -> Result<()> {
        let corrupt = |msg: String| Err(Error::Corruption(msg));

        if self.nodes[FRONT].prev != NIL || self.nodes[BACK].next != NIL {
            return corrupt("sentinel has an outer link".into());
        }

        let mut current = FRONT;
        let mut seen = 0usize;
        while current != BACK {
            let next = self.nodes[current].next;
            if next >= self.nodes.len() {
                return corrupt(format!("node {current} links to invalid handle {next}"));
            }
            if self.nodes[next].prev != current {
                return corrupt(format!("node {next}.prev does not point back to {current}"));
            }
            if next != BACK {
                seen += 1;
                if seen > self.len {
                    return corrupt(format!("chain is longer than len {}", self.len));
                }
            }
            current = next;
        }
        if seen != self.len {
            return corrupt(format!("chain has {seen} nodes, len is {}", self.len));
        }

        let linked_empty = self.nodes[FRONT].next == BACK && self.nodes[BACK].prev == FRONT;
        if linked_empty != (self.len == 0) {
            return corrupt("sentinel adjacency disagrees with len".into());
        }

        for &id in &self.free {
            if id == FRONT || id == BACK {
                return corrupt(format!("sentinel {id} is on the free list"));
            }
            let node = self.nodes.get(id).ok_or_else(|| {
                Error::Corruption(format!("free handle {id} is outside the arena"))
            })?;
            if node.prev != NIL || node.next != NIL {
                return corrupt(format!("free node {id} is still linked"));
            }
        }
        if self.nodes.len() != 2 + self.len + self.free.len() {
            return corrupt(format!(
                "arena holds {} slots for {} live and {} free nodes",
                self.nodes.len(),
                self.len,
                self.free.len()
            ));
        }
        Ok(())
    }

    /// Take a slot from the free list, or grow the arena.
    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Splice a new node holding `value` directly before `at`.
    fn link_before(&mut self, at: NodeId, value: Value) {
        let prev = self.nodes[at].prev;
        let id = self.alloc(Node {
            value,
            prev,
            next: at,
        });
        self.nodes[prev].next = id;
        self.nodes[at].prev = id;
        self.len += 1;
    }

    /// Splice `id` out of the chain and recycle its slot.
    fn unlink(&mut self, id: NodeId) -> Value {
        debug_assert!(id != FRONT && id != BACK);
        let Node { value, prev, next } = self.nodes[id];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[id] = Node::UNLINKED;
        self.free.push(id);
        self.len -= 1;
        value
    }

    /// Handle of the data node at `pos`, walking from the nearer sentinel.
    /// `pos` must be below `len`.
    fn node_at(&self, pos: usize) -> NodeId {
        debug_assert!(pos < self.len);
        if pos < self.len / 2 {
            let mut current = self.nodes[FRONT].next;
            for _ in 0..pos {
                current = self.nodes[current].next;
            }
            current
        } else {
            let mut current = self.nodes[BACK].prev;
            for _ in pos + 1..self.len {
                current = self.nodes[current].prev;
            }
            current
        }
    }
}

impl IntList for SentinelList {
    type Iter<'a> = SentinelIter<'a>;

    fn add_front(&mut self, value: Value) {
        let first = self.nodes[FRONT].next;
        self.link_before(first, value);
    }

    fn add_back(&mut self, value: Value) {
        self.link_before(BACK, value);
    }

    fn add(&mut self, index: Index, value: Value) -> Result<()> {
        let pos = check_position(index, self.len)?;
        if pos == self.len {
            self.add_back(value);
        } else {
            let at = self.node_at(pos);
            self.link_before(at, value);
        }
        Ok(())
    }

    fn remove_front(&mut self) -> Option<Value> {
        if self.len == 0 {
            return None;
        }
        Some(self.unlink(self.nodes[FRONT].next))
    }

    fn remove_back(&mut self) -> Option<Value> {
        if self.len == 0 {
            return None;
        }
        Some(self.unlink(self.nodes[BACK].prev))
    }

    fn remove(&mut self, index: Index) -> Result<Value> {
        let pos = check_element(index, self.len)?;
        let id = match pos {
            0 => self.nodes[FRONT].next,
            p if p == self.len - 1 => self.nodes[BACK].prev,
            p => self.node_at(p),
        };
        Ok(self.unlink(id))
    }

    fn get(&self, index: Index) -> Result<Value> {
        let pos = check_element(index, self.len)?;
        let id = match pos {
            0 => self.nodes[FRONT].next,
            p if p == self.len - 1 => self.nodes[BACK].prev,
            p => self.node_at(p),
        };
        Ok(self.nodes[id].value)
    }

    fn index_of(&self, value: Value) -> Index {
        self.iter()
            .position(|v| v == value)
            .map_or(NOT_FOUND, |i| i as Index)
    }

    fn is_empty(&self) -> bool {
        self.nodes[FRONT].next == BACK && self.nodes[BACK].prev == FRONT
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        tracing::debug!(len = self.len, free = self.free.len(), "clearing node arena");
        self.nodes.truncate(2);
        self.free.clear();
        self.nodes[FRONT].next = BACK;
        self.nodes[BACK].prev = FRONT;
        self.len = 0;
    }

    fn iter(&self) -> SentinelIter<'_> {
        SentinelIter {
            nodes: &self.nodes,
            current: self.nodes[FRONT].next,
            remaining: self.len,
        }
    }
}

impl Default for SentinelList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SentinelList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for SentinelList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for SentinelList {}

impl Extend<Value> for SentinelList {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.add_back(value);
        }
    }
}

impl FromIterator<Value> for SentinelList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = SentinelList::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a SentinelList {
    type Item = Value;
    type IntoIter = SentinelIter<'a>;

    fn into_iter(self) -> SentinelIter<'a> {
        self.iter()
    }
}

/// Cursor following `next` links from the first data node to `BACK`.
pub struct SentinelIter<'a> {
    nodes: &'a [Node],
    current: NodeId,
    remaining: usize,
}

impl Cursor for SentinelIter<'_> {
    fn is_valid(&self) -> bool {
        self.current != BACK
    }

    fn value(&self) -> Result<Value> {
        if !self.is_valid() {
            return Err(Error::Exhausted);
        }
        Ok(self.nodes[self.current].value)
    }

    fn advance(&mut self) -> Result<()> {
        if !self.is_valid() {
            return Err(Error::Exhausted);
        }
        self.current = self.nodes[self.current].next;
        self.remaining -= 1;
        Ok(())
    }
}

impl Iterator for SentinelIter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let value = self.value().ok()?;
        self.advance().ok()?;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SentinelIter<'_> {}

impl FusedIterator for SentinelIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_links_sentinels() {
        let list = SentinelList::new();
        assert_eq!(list.nodes[FRONT].next, BACK);
        assert_eq!(list.nodes[BACK].prev, FRONT);
        list.check_invariants().unwrap();
    }

    #[test]
    fn removed_slots_are_recycled() {
        let mut list: SentinelList = [1, 2, 3].into_iter().collect();
        assert_eq!(list.remove(1).unwrap(), 2);
        assert_eq!(list.free, vec![3]);
        assert_eq!(list.nodes[3].prev, NIL);
        assert_eq!(list.nodes[3].next, NIL);

        list.add_front(0);
        assert!(list.free.is_empty());
        assert_eq!(list.nodes.len(), 5);
        assert_eq!(list.to_vec(), vec![0, 1, 3]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn clear_drops_the_arena() {
        let mut list: SentinelList = (0..20).collect();
        list.remove_front();
        list.clear();
        assert_eq!(list.nodes.len(), 2);
        assert!(list.free.is_empty());
        list.check_invariants().unwrap();
    }

    #[test]
    fn node_at_walks_from_both_ends() {
        let list: SentinelList = (10..20).collect();
        for pos in 0..10 {
            assert_eq!(list.nodes[list.node_at(pos)].value, 10 + pos as Value);
        }
    }

    #[test]
    fn broken_back_link_is_reported() {
        let mut list: SentinelList = [1, 2, 3].into_iter().collect();
        let second = list.node_at(1);
        list.nodes[second].prev = BACK;
        assert!(matches!(list.check_invariants(), Err(Error::Corruption(_))));
    }

    #[test]
    fn wrong_len_is_reported() {
        let mut list: SentinelList = [1, 2].into_iter().collect();
        list.len = 3;
        assert!(matches!(list.check_invariants(), Err(Error::Corruption(_))));
    }

    #[test]
    fn sentinel_on_free_list_is_reported() {
        let mut list = SentinelList::new();
        list.free.push(FRONT);
        assert!(matches!(list.check_invariants(), Err(Error::Corruption(_))));
    }
}
