//! SQL construction shared by the repositories

mod filter;

pub use filter::{push_filter, Target};

use sqlx::{Postgres, QueryBuilder};

use social_core::policy::Filter;
use social_core::value_objects::Page;

/// Append ` WHERE <filter>`
pub fn push_where(builder: &mut QueryBuilder<'_, Postgres>, filter: &Filter, target: Target) {
    builder.push(" WHERE ");
    push_filter(builder, filter, target);
}

/// Append ordering by creation time (id as tie-breaker) and the page window
pub fn push_page(builder: &mut QueryBuilder<'_, Postgres>, page: &Page, target: Target) {
    let order = page.order.as_sql();
    builder
        .push(" ORDER BY ")
        .push(target.created_at_column())
        .push(" ")
        .push(order)
        .push(", ")
        .push(target.id_column())
        .push(" ")
        .push(order)
        .push(" LIMIT ");
    builder.push_bind(page.take());
    builder.push(" OFFSET ");
    builder.push_bind(page.skip());
}
