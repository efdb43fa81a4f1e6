//! Filter → SQL translation
//!
//! Appends a [`Filter`] to a [`QueryBuilder`] as a parenthesized boolean
//! expression. Every value is bound; only column names and fixed keywords are
//! pushed as text. Follow checks become correlated `EXISTS` sub-queries on
//! `follows`, text matches become `to_tsvector(col) @@ to_tsquery($n)`.

use sqlx::{Postgres, QueryBuilder};

use social_core::policy::{Filter, TextField};
use social_core::value_objects::SearchQuery;

/// Table a filter is evaluated against, with the alias the query uses for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// `posts p`
    Posts,
    /// `collections c`
    Collections,
    /// `users u`
    Users,
}

impl Target {
    /// Column holding the owning user's id
    pub const fn owner_column(self) -> &'static str {
        match self {
            Self::Posts => "p.owner_id",
            Self::Collections => "c.owner_id",
            Self::Users => "u.id",
        }
    }

    /// Column holding the privacy literal, if the table has one
    pub const fn privacy_column(self) -> Option<&'static str> {
        match self {
            Self::Posts => Some("p.privacy"),
            Self::Collections => Some("c.privacy"),
            Self::Users => None,
        }
    }

    /// Column holding the creation time used for ordering
    pub const fn created_at_column(self) -> &'static str {
        match self {
            Self::Posts => "p.created_at",
            Self::Collections => "c.created_at",
            Self::Users => "u.created_at",
        }
    }

    /// Primary key column, used as the ordering tie-breaker
    pub const fn id_column(self) -> &'static str {
        match self {
            Self::Posts => "p.id",
            Self::Collections => "c.id",
            Self::Users => "u.id",
        }
    }
}

/// Append `filter` as a boolean SQL expression
pub fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &Filter, target: Target) {
    match filter {
        Filter::All(parts) => push_junction(builder, parts, " AND ", "TRUE", target),
        Filter::Any(parts) => push_junction(builder, parts, " OR ", "FALSE", target),
        Filter::Privacy(privacy) => match target.privacy_column() {
            Some(column) => {
                builder.push(column).push(" = ");
                builder.push_bind(privacy.as_str().to_string());
            }
            None => {
                builder.push("FALSE");
            }
        },
        Filter::OwnedBy(user) => {
            builder.push(target.owner_column()).push(" = ");
            builder.push_bind(user.into_inner());
        }
        Filter::OwnerFollowedBy(user) => {
            builder.push("EXISTS (SELECT 1 FROM follows f WHERE f.follower_id = ");
            builder.push_bind(user.into_inner());
            builder
                .push(" AND f.followed_id = ")
                .push(target.owner_column())
                .push(")");
        }
        Filter::OwnerFollows(user) => {
            builder
                .push("EXISTS (SELECT 1 FROM follows f WHERE f.follower_id = ")
                .push(target.owner_column())
                .push(" AND f.followed_id = ");
            builder.push_bind(user.into_inner());
            builder.push(")");
        }
        Filter::Matches(field, query) => push_text_match(builder, *field, query, target),
    }
}

fn push_junction(
    builder: &mut QueryBuilder<'_, Postgres>,
    parts: &[Filter],
    separator: &str,
    identity: &str,
    target: Target,
) {
    if parts.is_empty() {
        builder.push(identity);
        return;
    }

    builder.push("(");
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            builder.push(separator);
        }
        push_filter(builder, part, target);
    }
    builder.push(")");
}

fn push_text_match(
    builder: &mut QueryBuilder<'_, Postgres>,
    field: TextField,
    query: &SearchQuery,
    target: Target,
) {
    // an empty expression matches nothing; skip the backend notice for it
    if query.is_empty() {
        builder.push("FALSE");
        return;
    }

    let column = match (target, field) {
        (Target::Posts, TextField::PostContent) => "p.content",
        (Target::Posts, TextField::MediaTitle) => {
            builder.push(
                "EXISTS (SELECT 1 FROM media m WHERE m.post_id = p.id AND to_tsvector(m.title) @@ to_tsquery(",
            );
            builder.push_bind(query.expression().to_string());
            builder.push("))");
            return;
        }
        (Target::Collections, TextField::CollectionName) => "c.name",
        (Target::Users, TextField::Username) => "u.username",
        (Target::Users, TextField::Handle) => "u.handle",
        _ => {
            builder.push("FALSE");
            return;
        }
    };

    builder.push("to_tsvector(").push(column).push(") @@ to_tsquery(");
    builder.push_bind(query.expression().to_string());
    builder.push(")");
}
