//! Paginated listings.
//!
//! A listing counts every match, then returns one slice of it. Pages are
//! 1-based; anything non-positive falls back to the defaults.

use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, QuerySelect, Select};
use serde::Serialize;

use crate::ResultEngine;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Largest offset or limit the store can bind (SQLite integers are `i64`).
const MAX_BOUND: u64 = i64::MAX as u64;

/// Which slice of a listing to return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
    /// Overrides the start computed from `page` when set.
    pub start_index: Option<u64>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            start_index: None,
        }
    }
}

impl PageRequest {
    /// Build a request from raw query values.
    #[must_use]
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: positive(page).unwrap_or(DEFAULT_PAGE),
            page_size: positive(page_size).unwrap_or(DEFAULT_PAGE_SIZE),
            start_index: None,
        }
    }

    /// Start the slice at an explicit index. Negative values are ignored.
    #[must_use]
    pub fn start_index(mut self, start_index: Option<i64>) -> Self {
        self.start_index = start_index.and_then(|index| u64::try_from(index).ok());
        self
    }

    #[must_use]
    pub fn offset(&self) -> u64 {
        self.start_index
            .unwrap_or_else(|| (self.page - 1).saturating_mul(self.page_size))
            .min(MAX_BOUND)
    }

    #[must_use]
    pub fn limit(&self) -> u64 {
        self.page_size.min(MAX_BOUND)
    }
}

fn positive(value: Option<i64>) -> Option<u64> {
    value
        .filter(|value| *value > 0)
        .and_then(|value| u64::try_from(value).ok())
}

/// One slice of a listing plus the size of the whole listing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
        }
    }
}

/// Count every row `select` matches and fetch the requested slice.
///
/// `select` should carry a total ordering, otherwise consecutive pages may
/// overlap.
pub(crate) async fn list_page<E, C>(
    db: &C,
    select: Select<E>,
    request: PageRequest,
) -> ResultEngine<Page<E::Model>>
where
    E: EntityTrait,
    E::Model: Send + Sync,
    C: ConnectionTrait,
{
    let total_count = select.clone().count(db).await?;
    let items = select
        .offset(request.offset())
        .limit(request.limit())
        .all(db)
        .await?;

    Ok(Page { items, total_count })
}
