pub mod auth;
pub mod occupancy;
pub mod society;
pub mod user;
