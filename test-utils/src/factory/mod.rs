//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Unique columns (phone, email, registration number) are
//! derived from a shared counter so repeated calls never collide.
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
//!     let user = factory::user::create_user(&db).await?;
//!     let society = factory::society::create_society(&db, user.id).await?;
//!
//!     // Or both at once
//!     let (owner, society) = factory::helpers::create_society_with_owner(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .phone("9876543210")
//!     .role("admin")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `society` - Create society entities (optionally with a raw wings document)
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod society;
pub mod user;

pub use society::create_society;
pub use user::create_user;
