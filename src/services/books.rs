//! Book listing service

use crate::{
    error::AppResult,
    models::{book::BOOK_INDEX_VIEW, Book, BookFilter, BookIndex, BookQuery},
    repository::BookStoreArc,
};

/// Books matched by a query, plus the genre set enumerated when the
/// query carried no genre filter.
struct BookSearch {
    books: Vec<Book>,
    observed_genres: Option<Vec<String>>,
}

#[derive(Clone)]
pub struct BooksService {
    store: BookStoreArc,
}

impl BooksService {
    pub fn new(store: BookStoreArc) -> Self {
        Self { store }
    }

    /// List books matching the search term and genre filter, authors attached
    pub async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        Ok(self.search(query).await?.books)
    }

    /// Data for the book index view
    pub async fn index(&self, query: &BookQuery) -> AppResult<BookIndex> {
        let search = self.search(query).await?;
        let genres_size = search.observed_genres.as_ref().map(Vec::len);

        Ok(BookIndex {
            view: BOOK_INDEX_VIEW.to_string(),
            books: search.books,
            genres: search.observed_genres,
            genres_size,
        })
    }

    /// Check that the underlying store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    async fn search(&self, query: &BookQuery) -> AppResult<BookSearch> {
        // Without a genre filter, match against every genre actually present.
        let (genres, observed_genres) = match query.genre_filter() {
            Some(genre) => (vec![genre.to_string()], None),
            None => {
                let observed = self.store.distinct_genres().await?;
                (observed.clone(), Some(observed))
            }
        };

        if genres.is_empty() {
            tracing::debug!("No genres in collection, skipping book lookup");
            return Ok(BookSearch {
                books: Vec::new(),
                observed_genres,
            });
        }

        let filter = BookFilter::new(query.search_term(), genres);
        let books = self.store.find_books(&filter).await?;

        tracing::debug!(
            search = ?filter.search,
            genre = ?query.genre_filter(),
            count = books.len(),
            "Book search"
        );

        Ok(BookSearch {
            books,
            observed_genres,
        })
    }
}
