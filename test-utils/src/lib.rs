//! Guildreview Test Utils
//!
//! Shared testing utilities for the guildreview application. Tests get an in-memory SQLite
//! database whose schema is generated straight from the SeaORM entities, plus factories for
//! inserting guilds and reviews with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_reviews() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_review_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
