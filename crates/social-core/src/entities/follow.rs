//! Follow edge - a directed "follows" relation between two users

use crate::value_objects::Id;

/// `follower_id` follows `followed_id`; unique per ordered pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FollowEdge {
    pub follower_id: Id,
    pub followed_id: Id,
}

impl FollowEdge {
    pub fn new(follower_id: Id, followed_id: Id) -> Self {
        Self {
            follower_id,
            followed_id,
        }
    }

    /// The same relation seen from the other side
    pub fn reversed(self) -> Self {
        Self::new(self.followed_id, self.follower_id)
    }
}
