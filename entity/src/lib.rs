//! SeaORM entity definitions for the guildreview database.

pub mod prelude;

pub mod discord_guild;
pub mod review;
