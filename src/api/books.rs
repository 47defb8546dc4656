//! Book listing endpoints
//!
//! Parameters are read as a plain map so a repeated key keeps its last
//! value instead of rejecting the request.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{Book, BookIndex, BookQuery},
    AppState,
};

/// List books, optionally filtered by name fragment and genre
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Matching books ordered by name, authors attached", body = Vec<Book>),
        (status = 500, description = "Data store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Json<Vec<Book>>> {
    let query = BookQuery::from(params);
    let books = state.services.books.list_books(&query).await?;
    Ok(Json(books))
}

/// Data for the book index view
#[utoipa::path(
    get,
    path = "/books/index",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Books plus the genre list when no genre filter was given", body = BookIndex),
        (status = 500, description = "Data store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn books_index(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Json<BookIndex>> {
    let query = BookQuery::from(params);
    let index = state.services.books.index(&query).await?;
    Ok(Json(index))
}
