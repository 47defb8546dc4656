//! Repository layer for book data access

pub mod books;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Book, BookFilter},
};

pub use books::PgBookStore;
pub use memory::MemoryBookStore;

/// Read access to the book collection.
///
/// Implementations attach every book's authors before returning, using
/// a bounded number of round trips regardless of how many books match.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore {
    /// Distinct genre values currently present, ascending.
    async fn distinct_genres(&self) -> AppResult<Vec<String>>;

    /// Books passing `filter` with their authors, ordered by name then id.
    async fn find_books(&self, filter: &BookFilter) -> AppResult<Vec<Book>>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> AppResult<()>;
}

/// Shared handle to a book store.
pub type BookStoreArc = Arc<dyn BookStore + Send + Sync>;
