mod occupancy;
mod society;
mod user;
