//! Value objects - immutable types that represent domain concepts

mod id;
pub mod pagination;
mod privacy;
pub mod search_query;

pub use id::{Id, IdParseError};
pub use pagination::{
    total_pages, Page, PageRequest, PaginationSettings, SortOrder, DEFAULT_PER_PAGE, MAX_PER_PAGE,
};
pub use privacy::Privacy;
pub use search_query::{sanitize, SearchQuery};
