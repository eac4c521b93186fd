// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod time;

pub use article_repos::{FAILING_STORE_DETAIL, FailingArticleStore, InMemoryArticleStore};
pub use time::fixed_now;
