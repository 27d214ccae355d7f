use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Guild, PartialGuild, Ready};
use serenity::async_trait;

pub mod guild;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
}

impl Handler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, _ctx: Context, ready: Ready) {
        ready::handle_ready(ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, _ctx: Context, guild: Guild, _is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, guild).await;
    }

    /// Called when a guild's name, icon or other settings change
    async fn guild_update(
        &self,
        _ctx: Context,
        _old_data_if_available: Option<Guild>,
        new_data: PartialGuild,
    ) {
        guild::handle_guild_update(&self.db, new_data).await;
    }
}
