//! Factory methods for creating test data.
//!
//! Factories create records with sensible defaults, reducing boilerplate in tests. Each
//! entity has its own module with a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let mapping = factory::create_notification_mapping(&db).await?;
//!
//!     // Customize
//!     let inactive = factory::notification_mapping::NotificationMappingFactory::new(&db)
//!         .guild_id("123")
//!         .is_active(false)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod helpers;
pub mod notification_mapping;

pub use notification_mapping::create_notification_mapping;
