//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for each table and convert entity models into
//! domain models at the boundary. Services never see `entity` types.

pub mod society;
pub mod user;

#[cfg(test)]
mod test;
