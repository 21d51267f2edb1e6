//! Weighted union-find over segment ids with an aggregated payload.
//!
//! One instance exists per connected feature kind. Each root carries a
//! payload that summarizes its whole component; payloads of non-root nodes
//! are stale and never read.
//!
//! ## Storage
//!
//! Nodes live in an `im::OrdMap`, so cloning a board (to probe a
//! hypothetical move) is O(1) and roots are visited in ascending id order.
//!
//! ## Preconditions
//!
//! Every id passed to `find`, `union` or `payload` must have been registered
//! with `make_set`. Violations are caller bugs and panic.

use im::OrdMap;

use crate::tiles::SegmentId;

/// Payload aggregated at union-find roots.
pub trait Mergeable: Clone {
    /// Fold the payload of another root into this one when a single edge
    /// match joins two distinct components.
    fn absorb(&mut self, other: Self);

    /// Account for an edge match between two segments that already share
    /// this root (a closing loop).
    fn rejoin(&mut self);
}

/// Outcome of `UnionFind::union`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Union {
    /// Two components merged; `absorbed` now hangs under `root`.
    Merged { root: SegmentId, absorbed: SegmentId },
    /// Both ids were already in the component rooted at this id.
    AlreadyJoined(SegmentId),
}

impl Union {
    /// Root of the joined component.
    #[must_use]
    pub fn root(self) -> SegmentId {
        match self {
            Union::Merged { root, .. } | Union::AlreadyJoined(root) => root,
        }
    }
}

#[derive(Clone, Debug)]
struct Node<P> {
    parent: SegmentId,
    /// Member count, meaningful at roots only.
    size: u32,
    payload: P,
}

/// Path-compressed union-by-size disjoint sets.
///
/// ## Example
///
/// ```
/// use meeple_core::features::{FeatureStats, UnionFind};
/// use meeple_core::tiles::SegmentId;
///
/// let mut cities: UnionFind<FeatureStats> = UnionFind::new();
/// cities.make_set(SegmentId(1), FeatureStats::fragment(1, false));
/// cities.make_set(SegmentId(2), FeatureStats::fragment(1, true));
///
/// let root = cities.union(SegmentId(1), SegmentId(2)).root();
/// let stats = cities.payload(root);
/// assert_eq!(stats.size, 2);
/// assert_eq!(stats.pennants, 1);
/// assert_eq!(stats.open_edges, 0);
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind<P> {
    nodes: OrdMap<SegmentId, Node<P>>,
    unions: u64,
}

impl<P: Mergeable> Default for UnionFind<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Mergeable> UnionFind<P> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: OrdMap::new(),
            unions: 0,
        }
    }

    /// Register `id` as a singleton component.
    ///
    /// Panics if `id` is already registered.
    pub fn make_set(&mut self, id: SegmentId, payload: P) {
        assert!(!self.nodes.contains_key(&id), "Segment {} already registered", id);
        self.nodes.insert(
            id,
            Node {
                parent: id,
                size: 1,
                payload,
            },
        );
    }

    #[must_use]
    pub fn contains(&self, id: SegmentId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of registered ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of `union` calls processed so far (one per edge match).
    #[must_use]
    pub fn unions(&self) -> u64 {
        self.unions
    }

    fn node(&self, id: SegmentId) -> &Node<P> {
        match self.nodes.get(&id) {
            Some(node) => node,
            None => panic!("Segment {} not registered", id),
        }
    }

    /// Root of `id` without modifying the structure.
    #[must_use]
    pub fn root(&self, id: SegmentId) -> SegmentId {
        let mut current = id;
        loop {
            let parent = self.node(current).parent;
            if parent == current {
                return current;
            }
            current = parent;
        }
    }

    /// Root of `id`, compressing the path so every visited node points
    /// straight at the root.
    pub fn find(&mut self, id: SegmentId) -> SegmentId {
        let root = self.root(id);
        let mut current = id;
        while current != root {
            let node = self
                .nodes
                .get_mut(&current)
                .unwrap_or_else(|| panic!("Segment {} not registered", current));
            current = std::mem::replace(&mut node.parent, root);
        }
        root
    }

    /// Join the components of `i` and `j` across one matched edge.
    ///
    /// Distinct roots: the smaller component is attached under the larger
    /// (ties keep `i`'s root) and its payload absorbed. Same root: the
    /// payload is told about the closing loop.
    pub fn union(&mut self, i: SegmentId, j: SegmentId) -> Union {
        self.unions += 1;

        let mut root = self.find(i);
        let mut absorbed = self.find(j);

        if root == absorbed {
            self.root_node_mut(root).payload.rejoin();
            return Union::AlreadyJoined(root);
        }

        if self.node(root).size < self.node(absorbed).size {
            std::mem::swap(&mut root, &mut absorbed);
        }

        let (size, payload) = {
            let node = self.root_node_mut(absorbed);
            node.parent = root;
            (node.size, node.payload.clone())
        };

        let node = self.root_node_mut(root);
        node.size += size;
        node.payload.absorb(payload);

        Union::Merged { root, absorbed }
    }

    fn root_node_mut(&mut self, root: SegmentId) -> &mut Node<P> {
        self.nodes
            .get_mut(&root)
            .unwrap_or_else(|| panic!("Segment {} not registered", root))
    }

    /// Are `i` and `j` in the same component?
    #[must_use]
    pub fn connected(&self, i: SegmentId, j: SegmentId) -> bool {
        self.root(i) == self.root(j)
    }

    /// Aggregated payload of the component containing `id`.
    #[must_use]
    pub fn payload(&self, id: SegmentId) -> &P {
        &self.node(self.root(id)).payload
    }

    /// Mutable aggregated payload of the component containing `id`.
    pub fn payload_mut(&mut self, id: SegmentId) -> &mut P {
        let root = self.find(id);
        &mut self.root_node_mut(root).payload
    }

    /// Member count of the component containing `id`.
    #[must_use]
    pub fn component_size(&self, id: SegmentId) -> u32 {
        self.node(self.root(id)).size
    }

    /// Iterate `(root, payload)` for every component, in ascending root id.
    pub fn roots(&self) -> impl Iterator<Item = (SegmentId, &P)> {
        self.nodes
            .iter()
            .filter(|(id, node)| node.parent == **id)
            .map(|(id, node)| (*id, &node.payload))
    }

    /// Ids of every component root, in ascending order.
    #[must_use]
    pub fn root_ids(&self) -> Vec<SegmentId> {
        self.roots().map(|(id, _)| id).collect()
    }
}
