//! Route handlers
//!
//! All HTTP request handlers organized by surface.

pub mod feed;
pub mod health;
pub mod search;
