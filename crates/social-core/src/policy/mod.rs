//! Visibility policy engine
//!
//! Decides which posts and collections a viewer may read. Every rule is a
//! [`Filter`] expression: storage adapters translate it into a query predicate
//! so it composes with search and pagination, and [`Filter::evaluate`] gives the
//! same answer in memory.

mod filter;
mod friendship;
mod viewer;
mod visibility;

pub use filter::{Filter, Filterable, TextField};
pub use friendship::{is_friend, FollowGraph, FollowSet};
pub use viewer::Viewer;
pub use visibility::{partition, Audience, StandardVisibility, VisibilityPolicy};
