//! Model to entity mappers
//!
//! - `From<Model> for Entity` where every column maps infallibly
//! - `TryFrom<Model> for Entity` where a stored literal must be validated (privacy)
//!
//! Aggregates come back with their child lists empty; repositories fill
//! media, preview media and likers from follow-up queries.

mod collection;
mod media;
mod post;
mod user;
