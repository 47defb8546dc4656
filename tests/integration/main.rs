//! Integration tests

mod postgres_tests;
