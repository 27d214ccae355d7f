use crate::server::{data::discord_guild::DiscordGuildRepository, model::discord::GuildSyncParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, serenity::create_test_guild};

mod find_by_guild_id;
mod get_all;
mod upsert;
