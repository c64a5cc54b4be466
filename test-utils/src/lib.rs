//! Tubewatch Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the notifier.
//! This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases, factories for notification mapping records, and helpers for building Serenity
//! interaction payloads.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Record factories with sensible defaults
//! - **serenity**: Serenity model factories deserialized from Discord-shaped JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_mapping_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_notification_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
