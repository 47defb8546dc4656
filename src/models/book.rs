//! Book model, listing query and resolved filter

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::author::Author;

/// Logical name of the view that lists books
pub const BOOK_INDEX_VIEW: &str = "books/index";

/// Catalog entry with its authors attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i32,
    pub name: String,
    /// Genre label; the empty string is a regular value
    pub genre: String,
    pub authors: Vec<Author>,
}

impl Book {
    pub fn new(id: i32, name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            genre: genre.into(),
            authors: Vec::new(),
        }
    }

    pub fn with_authors(mut self, authors: Vec<Author>) -> Self {
        self.authors = authors;
        self
    }
}

/// Query string accepted by the book listing endpoints
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive fragment of the book name
    pub search: Option<String>,
    /// Exact genre to keep
    pub genre: Option<String>,
}

impl BookQuery {
    /// Search fragment, `None` when absent or empty
    pub fn search_term(&self) -> Option<&str> {
        non_empty(self.search.as_deref())
    }

    /// Genre filter, `None` when absent or empty
    pub fn genre_filter(&self) -> Option<&str> {
        non_empty(self.genre.as_deref())
    }
}

/// Builds the query from raw parameters, unknown keys ignored.
impl From<HashMap<String, String>> for BookQuery {
    fn from(mut params: HashMap<String, String>) -> Self {
        Self {
            search: params.remove("search"),
            genre: params.remove("genre"),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Resolved predicate handed to a book store.
///
/// A book passes when its name contains `search` (ignoring case) and its
/// genre is one of `genres`. An empty `genres` set matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFilter {
    pub search: Option<String>,
    pub genres: Vec<String>,
}

impl BookFilter {
    pub fn new(search: Option<&str>, genres: Vec<String>) -> Self {
        Self {
            search: non_empty(search).map(str::to_string),
            genres,
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        let name_matches = match &self.search {
            Some(term) => book.name.to_lowercase().contains(&term.to_lowercase()),
            None => true,
        };
        name_matches && self.genres.iter().any(|g| *g == book.genre)
    }
}

/// Data for the book index view
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookIndex {
    /// Logical view name, always `books/index`
    pub view: String,
    pub books: Vec<Book>,
    /// Distinct genres in the collection, only when no genre filter was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres_size: Option<usize>,
}
