//! Discord guild factory for creating test guild entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test Discord guilds with customizable fields.
///
/// ```rust,ignore
/// let guild = DiscordGuildFactory::new(&db)
///     .guild_id(987654321)
///     .name("CustomGuild")
///     .build()
///     .await?;
/// ```
pub struct DiscordGuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    name: String,
    icon_hash: Option<String>,
}

impl<'a> DiscordGuildFactory<'a> {
    /// Creates a new factory with defaults.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented counter value
    /// - name: `"Guild {id}"`
    /// - icon_hash: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id as i64,
            name: format!("Guild {}", id),
            icon_hash: None,
        }
    }

    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn icon_hash(mut self, icon_hash: Option<String>) -> Self {
        self.icon_hash = icon_hash;
        self
    }

    /// Builds and inserts the guild entity into the database.
    pub async fn build(self) -> Result<entity::discord_guild::Model, DbErr> {
        entity::discord_guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            icon_hash: ActiveValue::Set(self.icon_hash),
            last_sync_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Discord guild with default values.
///
/// Shorthand for `DiscordGuildFactory::new(db).build().await`.
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::discord_guild::Model, DbErr> {
    DiscordGuildFactory::new(db).build().await
}
