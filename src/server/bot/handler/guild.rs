//! Guild event handlers.
//!
//! `guild_create` fires for every guild on startup, when the bot joins a guild and when a
//! guild becomes available again after an outage. `guild_update` fires when the guild's
//! settings change. Both upsert the guild's name and icon.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Guild, PartialGuild};

use crate::server::{model::discord::GuildSyncParam, service::discord::DiscordGuildService};

pub async fn handle_guild_create(db: &DatabaseConnection, guild: Guild) {
    tracing::debug!("Guild create event: {} ({})", guild.name, guild.id);

    sync_guild(db, GuildSyncParam::from(&guild)).await;
}

pub async fn handle_guild_update(db: &DatabaseConnection, guild: PartialGuild) {
    tracing::debug!("Guild update event: {} ({})", guild.name, guild.id);

    sync_guild(db, GuildSyncParam::from(&guild)).await;
}

async fn sync_guild(db: &DatabaseConnection, param: GuildSyncParam) {
    let guild_id = param.guild_id;

    if let Err(e) = DiscordGuildService::new(db).sync(param).await {
        tracing::error!("Failed to sync guild {}: {:?}", guild_id, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::data::discord_guild::DiscordGuildRepository;
    use sea_orm::DbErr;
    use test_utils::{builder::TestBuilder, serenity::create_test_guild};

    /// Expected: the guild is listed afterwards
    #[tokio::test]
    async fn guild_create_stores_guild() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::DiscordGuild)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        handle_guild_create(db, create_test_guild(555, "Rust Lounge", Some("beef"))).await;

        let guild = DiscordGuildRepository::new(db)
            .find_by_guild_id(555)
            .await?
            .unwrap();
        assert_eq!(guild.name, "Rust Lounge");
        assert!(guild.icon_hash.is_some());

        Ok(())
    }

    /// Expected: the error is logged and the handler returns
    #[tokio::test]
    async fn guild_create_survives_missing_table() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        handle_guild_create(db, create_test_guild(1, "Nowhere", None)).await;
    }
}
