use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::discord::{DiscordGuild, GuildSyncParam};

pub struct DiscordGuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordGuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a guild or updates its name, icon and sync time if it already exists.
    pub async fn upsert(&self, param: GuildSyncParam) -> Result<DiscordGuild, DbErr> {
        let entity = entity::prelude::DiscordGuild::insert(entity::discord_guild::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id as i64),
            name: ActiveValue::Set(param.name),
            icon_hash: ActiveValue::Set(param.icon_hash),
            last_sync_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::discord_guild::Column::GuildId)
                .update_columns([
                    entity::discord_guild::Column::Name,
                    entity::discord_guild::Column::IconHash,
                    entity::discord_guild::Column::LastSyncAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(DiscordGuild::from_entity(entity))
    }

    /// Gets every known guild ordered by name.
    pub async fn get_all(&self) -> Result<Vec<DiscordGuild>, DbErr> {
        let entities = entity::prelude::DiscordGuild::find()
            .order_by_asc(entity::discord_guild::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DiscordGuild::from_entity).collect())
    }

    /// Finds a guild by its Discord guild ID
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild
    ///
    /// # Returns
    /// - `Ok(Some(DiscordGuild))`: Guild found in database
    /// - `Ok(None)`: Guild not found (bot never saw it)
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<DiscordGuild>, DbErr> {
        let entity = entity::prelude::DiscordGuild::find()
            .filter(entity::discord_guild::Column::GuildId.eq(guild_id as i64))
            .one(self.db)
            .await?;

        Ok(entity.map(DiscordGuild::from_entity))
    }
}
