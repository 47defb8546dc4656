//! PostgreSQL book store

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, Pool, Postgres, QueryBuilder};

use crate::{
    error::AppResult,
    models::{Author, Book, BookFilter},
};

use super::BookStore;

const SELECT_BOOKS: &str = "SELECT b.id, b.name, b.genre FROM books b";

#[derive(Debug, FromRow)]
struct BookRow {
    id: i32,
    name: String,
    genre: String,
}

#[derive(Debug, FromRow)]
struct BookAuthorRow {
    book_id: i32,
    id: i32,
    name: String,
}

/// Escapes LIKE metacharacters and wraps the term for substring matching.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Builds the books query for a filter, every value bound as a parameter.
pub fn books_query(filter: &BookFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(SELECT_BOOKS);
    qb.push(" WHERE ");
    if let Some(ref term) = filter.search {
        qb.push("b.name ILIKE ").push_bind(like_pattern(term)).push(" AND ");
    }
    qb.push("b.genre = ANY(")
        .push_bind(filter.genres.clone())
        .push(")");
    qb.push(" ORDER BY b.name, b.id");
    qb
}

#[derive(Clone, Debug)]
pub struct PgBookStore {
    pool: Pool<Postgres>,
}

impl PgBookStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Load the authors of all given books in one query, grouped by book id
    async fn authors_by_book(&self, book_ids: &[i32]) -> AppResult<HashMap<i32, Vec<Author>>> {
        let rows = sqlx::query_as::<_, BookAuthorRow>(
            r#"
            SELECT ba.book_id, a.id, a.name
            FROM book_authors ba
            JOIN authors a ON a.id = ba.author_id
            WHERE ba.book_id = ANY($1)
            ORDER BY ba.book_id, ba.position, a.name
            "#,
        )
        .bind(book_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<i32, Vec<Author>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.book_id)
                .or_default()
                .push(Author::new(row.id, row.name));
        }
        Ok(grouped)
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn distinct_genres(&self) -> AppResult<Vec<String>> {
        let genres = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT genre FROM books ORDER BY genre",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(genres)
    }

    async fn find_books(&self, filter: &BookFilter) -> AppResult<Vec<Book>> {
        let rows = books_query(filter)
            .build_query_as::<BookRow>()
            .fetch_all(&self.pool)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        let mut authors = self.authors_by_book(&ids).await?;

        tracing::debug!(books = rows.len(), "Loaded books with authors");

        Ok(rows
            .into_iter()
            .map(|row| Book {
                authors: authors.remove(&row.id).unwrap_or_default(),
                id: row.id,
                name: row.name,
                genre: row.genre,
            })
            .collect())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
