//! In-memory book store

use std::{collections::BTreeSet, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{Book, BookFilter},
};

use super::BookStore;

/// Book store holding the whole collection in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookStore {
    books: Arc<RwLock<Vec<Book>>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store populated with `books`, authors included.
    pub fn with_data(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    pub async fn insert(&self, book: Book) {
        self.books.write().await.push(book);
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn distinct_genres(&self) -> AppResult<Vec<String>> {
        let books = self.books.read().await;
        let genres: BTreeSet<&str> = books.iter().map(|b| b.genre.as_str()).collect();
        Ok(genres.into_iter().map(str::to_string).collect())
    }

    async fn find_books(&self, filter: &BookFilter) -> AppResult<Vec<Book>> {
        let books = self.books.read().await;
        let mut matched: Vec<Book> = books
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(matched)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
