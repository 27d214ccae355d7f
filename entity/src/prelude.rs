pub use super::discord_guild::Entity as DiscordGuild;
pub use super::review::Entity as Review;
