//! Follow graph access and the friendship predicate

use std::collections::HashSet;

use crate::entities::FollowEdge;
use crate::value_objects::Id;

/// Read access to directed follow edges
pub trait FollowGraph {
    /// Whether the edge `follower -> followed` exists
    fn is_following(&self, follower: Id, followed: Id) -> bool;
}

/// Friendship is mutual following: both `a -> b` and `b -> a` exist.
pub fn is_friend<G: FollowGraph + ?Sized>(graph: &G, a: Id, b: Id) -> bool {
    graph.is_following(a, b) && graph.is_following(b, a)
}

/// An immutable snapshot of follow edges.
///
/// The graph is read-only for the lifetime of a request, so a snapshot can
/// answer any number of lookups for that request.
#[derive(Debug, Clone, Default)]
pub struct FollowSet {
    edges: HashSet<FollowEdge>,
}

impl FollowSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, edge: FollowEdge) -> bool {
        self.edges.insert(edge)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl FromIterator<FollowEdge> for FollowSet {
    fn from_iter<I: IntoIterator<Item = FollowEdge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl FollowGraph for FollowSet {
    fn is_following(&self, follower: Id, followed: Id) -> bool {
        self.edges.contains(&FollowEdge::new(follower, followed))
    }
}
