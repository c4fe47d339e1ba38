//! JSON data transfer objects exchanged with API clients.
//!
//! These types define the wire format of every endpoint (camelCase JSON) and the
//! enum vocabularies shared with the server's domain models.

pub mod api;
pub mod society;
pub mod user;
