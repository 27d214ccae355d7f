//! Data transfer objects shared between the browser client and the server.

pub mod api;
pub mod discord;
pub mod review;
