//! Visibility rules per content kind and feed surface

use super::filter::{Filter, Filterable};
use super::friendship::FollowGraph;
use super::viewer::Viewer;
use crate::value_objects::Privacy;

/// Which post surface a filter is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    /// Everything the viewer may read, including their own posts (home feed, search)
    General,
    /// Only content from accounts the viewer follows; never the viewer's own posts
    Following,
}

/// Named, injectable visibility predicates.
///
/// Implementations must return filters that are pure functions of
/// `(privacy, owner, viewer, follow edges)`.
pub trait VisibilityPolicy: Send + Sync {
    /// Posts `viewer` may see on the given surface
    fn posts(&self, viewer: Viewer, audience: Audience) -> Filter;

    /// Collections `viewer` may see
    fn collections(&self, viewer: Viewer) -> Filter;
}

/// The platform's visibility rules
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardVisibility;

impl VisibilityPolicy for StandardVisibility {
    fn posts(&self, viewer: Viewer, audience: Audience) -> Filter {
        let me = viewer.id();
        match audience {
            // public, or my own friends-only, or friends-only from a friend
            Audience::General => Filter::Any(vec![
                Filter::Privacy(Privacy::Public),
                Filter::All(vec![
                    Filter::OwnedBy(me),
                    Filter::Privacy(Privacy::FriendsOnly),
                ]),
                Filter::Privacy(Privacy::FriendsOnly).and(Filter::owner_is_friend_of(me)),
            ]),
            // friends-only from a friend, or public from someone I follow
            Audience::Following => Filter::Any(vec![
                Filter::Privacy(Privacy::FriendsOnly).and(Filter::owner_is_friend_of(me)),
                Filter::All(vec![
                    Filter::Privacy(Privacy::Public),
                    Filter::OwnerFollowedBy(me),
                ]),
            ]),
        }
    }

    // No owner clause: a viewer's own friends-only collections are excluded.
    fn collections(&self, viewer: Viewer) -> Filter {
        Filter::Any(vec![
            Filter::Privacy(Privacy::Public),
            Filter::Privacy(Privacy::FriendsOnly).and(Filter::owner_is_friend_of(viewer.id())),
        ])
    }
}

/// Split `items` into `(visible, hidden)` under `filter`, preserving order
pub fn partition<T, G>(
    filter: &Filter,
    items: impl IntoIterator<Item = T>,
    graph: &G,
) -> (Vec<T>, Vec<T>)
where
    T: Filterable,
    G: FollowGraph + ?Sized,
{
    items
        .into_iter()
        .partition(|item| filter.evaluate(item, graph))
}
