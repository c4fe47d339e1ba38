//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. The society model also carries
//! the tree navigator and the occupancy state machine, which operate purely on the
//! in-memory aggregate.

pub mod society;
pub mod user;
