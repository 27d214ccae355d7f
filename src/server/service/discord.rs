use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{discord_guild::DiscordGuildRepository, review::ReviewRepository},
    error::AppError,
    model::discord::{DiscordGuild, DiscordGuildDetail, GuildSyncParam},
};

pub struct DiscordGuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordGuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<DiscordGuild>, AppError> {
        let guild_repo = DiscordGuildRepository::new(self.db);

        Ok(guild_repo.get_all().await?)
    }

    /// Gets a guild with its reviews and rating statistics.
    ///
    /// # Returns
    /// - `Ok(Some(DiscordGuildDetail))` - Guild exists
    /// - `Ok(None)` - No guild with this ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_detail(&self, guild_id: u64) -> Result<Option<DiscordGuildDetail>, AppError> {
        let guild_repo = DiscordGuildRepository::new(self.db);
        let review_repo = ReviewRepository::new(self.db);

        let Some(guild) = guild_repo.find_by_guild_id(guild_id).await? else {
            return Ok(None);
        };

        let reviews = review_repo.get_by_guild_id(guild_id).await?;

        Ok(Some(DiscordGuildDetail::new(guild, reviews)))
    }

    /// Stores guild metadata received from the Discord gateway.
    pub async fn sync(&self, param: GuildSyncParam) -> Result<DiscordGuild, AppError> {
        let guild_repo = DiscordGuildRepository::new(self.db);

        let guild = guild_repo.upsert(param).await?;

        tracing::debug!("Synced guild {} ({})", guild.name, guild.guild_id);

        Ok(guild)
    }
}
