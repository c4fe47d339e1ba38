//! SeaORM entities for the society hub database.
//!
//! The `society` row stores its wings → floors → flats tree as a single JSON
//! document so the aggregate is always read and written as one unit.

pub mod prelude;

pub mod society;
pub mod user;
