#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod discord_guild;

#[cfg(feature = "web")]
pub mod review;

#[cfg(feature = "web")]
pub use discord_guild::{get_all_discord_guilds, get_discord_guild_detail};

#[cfg(feature = "web")]
pub use review::create_review;
