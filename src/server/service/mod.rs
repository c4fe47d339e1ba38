//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and repositories. They enforce business rules
//! (uniqueness checks, owner/requester existence, occupancy transitions), load and
//! save society aggregates, and work with domain models rather than DTOs or entity
//! models.

pub mod auth;
pub mod occupancy;
pub mod society;
pub mod user;

#[cfg(test)]
mod test;
