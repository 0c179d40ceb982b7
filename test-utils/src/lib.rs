//! Fantasy Frontiers Test Utils
//!
//! Shared testing utilities for the bot's repository and service tests. The crate
//! offers a builder for test contexts backed by in-memory SQLite databases and
//! factories that insert rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row builders for characters, towns, settings and translations
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn loads_character() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_character_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let character = test_utils::factory::create_character(db).await?;
//!     // Perform repository operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
