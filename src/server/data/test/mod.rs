mod society;
mod user;
