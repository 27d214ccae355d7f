//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these types at the data layer boundary, and
//! controllers convert them into DTOs for responses.

pub mod discord;
pub mod review;
