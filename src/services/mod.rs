//! Business logic services

pub mod books;

use crate::repository::BookStoreArc;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
}

impl Services {
    /// Create all services on top of the given book store
    pub fn new(store: BookStoreArc) -> Self {
        Self {
            books: books::BooksService::new(store),
        }
    }
}
