//! Repositories over the SeaORM entities.
//!
//! Repositories take a borrowed connection, run a single query per method and return domain
//! models from `server::model`.

pub mod discord_guild;
pub mod review;

#[cfg(test)]
mod test;
