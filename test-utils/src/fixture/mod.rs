//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests that exercise entity-to-domain
//! conversion or pure business logic. Unlike factories, fixtures do NOT insert data into
//! the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//! let society = fixture::society::entity_builder()
//!     .wings(serde_json::json!([]))
//!     .build();
//! ```

pub mod society;
pub mod user;

pub use society::{entity as society_entity, entity_builder as society_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
