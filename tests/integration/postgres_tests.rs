//! Tests against a live PostgreSQL database
//!
//! Run with: DATABASE_URL=postgres://... cargo test -- --ignored

use std::sync::Arc;

use bibliotheca_server::{
    models::{Author, BookQuery},
    repository::{BookStore, PgBookStore},
    services::books::BooksService,
};
use sqlx::{postgres::PgPoolOptions, Executor, Pool, Postgres};

async fn seeded_pool() -> Pool<Postgres> {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    sqlx::query("TRUNCATE book_authors, books, authors RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await
        .expect("Failed to truncate");

    // Multiple statements need the simple query protocol
    pool.execute(
        r#"
        INSERT INTO authors (name) VALUES ('Frank Herbert'), ('Jane Austen'), ('Brian Herbert');
        INSERT INTO books (name, genre) VALUES ('Emma', 'Romance'), ('Dune', 'SciFi'), ('100% Pure', '');
        INSERT INTO book_authors (book_id, author_id, position) VALUES (1, 2, 0), (2, 1, 0), (2, 3, 1);
        "#,
    )
    .await
    .expect("Failed to seed");

    pool
}

fn query(search: Option<&str>, genre: Option<&str>) -> BookQuery {
    BookQuery {
        search: search.map(str::to_string),
        genre: genre.map(str::to_string),
    }
}

#[tokio::test]
#[ignore]
async fn test_postgres_listing() {
    let store = PgBookStore::new(seeded_pool().await);
    store.ping().await.expect("ping");
    assert_eq!(
        store.distinct_genres().await.unwrap(),
        vec!["", "Romance", "SciFi"]
    );

    let service = BooksService::new(Arc::new(store));

    let all = service.list_books(&query(None, None)).await.unwrap();
    let names: Vec<&str> = all.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["100% Pure", "Dune", "Emma"]);

    let dune = service.list_books(&query(Some("du"), None)).await.unwrap();
    assert_eq!(dune.len(), 1);
    assert_eq!(
        dune[0].authors,
        vec![Author::new(1, "Frank Herbert"), Author::new(3, "Brian Herbert")]
    );

    let romance = service.list_books(&query(None, Some("Romance"))).await.unwrap();
    assert_eq!(romance.len(), 1);
    assert_eq!(romance[0].name, "Emma");

    assert!(service.list_books(&query(Some("z"), None)).await.unwrap().is_empty());

    // '%' is matched literally
    let pure = service.list_books(&query(Some("0%"), None)).await.unwrap();
    assert_eq!(pure.len(), 1);
    assert!(service.list_books(&query(Some("m_a"), None)).await.unwrap().is_empty());
}
