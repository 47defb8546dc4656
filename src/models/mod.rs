//! Data models for Bibliotheca

pub mod author;
pub mod book;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookFilter, BookIndex, BookQuery};
