//! Filter expressions
//!
//! A [`Filter`] is a boolean predicate over one row of content, built from
//! privacy, ownership, follow-edge and full-text clauses. The same tree is
//! translated to SQL by the storage layer and evaluated in memory here.

use crate::entities::{CollectionRecord, PostRecord, User};
use crate::value_objects::{Id, Privacy, SearchQuery};

use super::friendship::FollowGraph;

/// Text columns a full-text clause can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    PostContent,
    /// Title of any media attached to a post
    MediaTitle,
    CollectionName,
    Username,
    Handle,
}

/// Predicate over a single content row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Conjunction; empty means "always true"
    All(Vec<Filter>),
    /// Disjunction; empty means "always false"
    Any(Vec<Filter>),
    /// The row carries this privacy level
    Privacy(Privacy),
    /// The row is owned by this user
    OwnedBy(Id),
    /// The edge `user -> row owner` exists
    OwnerFollowedBy(Id),
    /// The edge `row owner -> user` exists
    OwnerFollows(Id),
    /// Full-text match of a sanitized query against a text column
    Matches(TextField, SearchQuery),
}

impl Filter {
    /// The owner and `user` follow each other
    pub fn owner_is_friend_of(user: Id) -> Self {
        Self::All(vec![Self::OwnerFollowedBy(user), Self::OwnerFollows(user)])
    }

    /// Conjunction of `self` and `other`, flattening nested conjunctions
    pub fn and(self, other: Filter) -> Self {
        match (self, other) {
            (Self::All(mut left), Self::All(right)) => {
                left.extend(right);
                Self::All(left)
            }
            (Self::All(mut left), other) => {
                left.push(other);
                Self::All(left)
            }
            (this, Self::All(mut right)) => {
                right.insert(0, this);
                Self::All(right)
            }
            (this, other) => Self::All(vec![this, other]),
        }
    }

    /// Evaluate the predicate against one row.
    ///
    /// Pure: reads the row and the graph, mutates nothing.
    pub fn evaluate<T, G>(&self, item: &T, graph: &G) -> bool
    where
        T: Filterable + ?Sized,
        G: FollowGraph + ?Sized,
    {
        match self {
            Self::All(parts) => parts.iter().all(|part| part.evaluate(item, graph)),
            Self::Any(parts) => parts.iter().any(|part| part.evaluate(item, graph)),
            Self::Privacy(privacy) => item.privacy() == Some(*privacy),
            Self::OwnedBy(user) => item.owner_id() == *user,
            Self::OwnerFollowedBy(user) => graph.is_following(*user, item.owner_id()),
            Self::OwnerFollows(user) => graph.is_following(item.owner_id(), *user),
            Self::Matches(field, query) => item
                .text(*field)
                .iter()
                .any(|text| query.matches_text(text)),
        }
    }
}

/// Rows a [`Filter`] can be evaluated against
pub trait Filterable {
    /// User that owns the row (for a user row, the user itself)
    fn owner_id(&self) -> Id;

    /// Privacy level, if the row kind has one
    fn privacy(&self) -> Option<Privacy>;

    /// Text values of `field` on this row; empty when the row has no such field
    fn text(&self, field: TextField) -> Vec<&str>;
}

impl Filterable for PostRecord {
    fn owner_id(&self) -> Id {
        self.post.owner_id
    }

    fn privacy(&self) -> Option<Privacy> {
        Some(self.post.privacy)
    }

    fn text(&self, field: TextField) -> Vec<&str> {
        match field {
            TextField::PostContent => vec![self.post.content.as_str()],
            TextField::MediaTitle => self.media.iter().map(|m| m.title.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

impl Filterable for CollectionRecord {
    fn owner_id(&self) -> Id {
        self.collection.owner_id
    }

    fn privacy(&self) -> Option<Privacy> {
        Some(self.collection.privacy)
    }

    fn text(&self, field: TextField) -> Vec<&str> {
        match field {
            TextField::CollectionName => vec![self.collection.name.as_str()],
            _ => Vec::new(),
        }
    }
}

impl Filterable for User {
    fn owner_id(&self) -> Id {
        self.id
    }

    fn privacy(&self) -> Option<Privacy> {
        None
    }

    fn text(&self, field: TextField) -> Vec<&str> {
        match field {
            TextField::Username => vec![self.username.as_str()],
            TextField::Handle => vec![self.handle.as_str()],
            _ => Vec::new(),
        }
    }
}
