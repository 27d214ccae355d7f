//! Discord guild domain models.

use chrono::{DateTime, Utc};
use serenity::all::{Guild, ImageHash, PartialGuild};

use crate::{
    model::discord::{DiscordGuildDetailDto, DiscordGuildDto},
    server::model::review::{Review, ReviewStats},
};

/// A reviewable Discord server as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuild {
    pub guild_id: u64,
    pub name: String,
    pub icon_hash: Option<String>,
    /// When the bot last saw this guild.
    pub last_sync_at: DateTime<Utc>,
}

impl DiscordGuild {
    pub fn from_entity(entity: entity::discord_guild::Model) -> Self {
        Self {
            guild_id: entity.guild_id as u64,
            name: entity.name,
            icon_hash: entity.icon_hash,
            last_sync_at: entity.last_sync_at,
        }
    }

    pub fn into_dto(self) -> DiscordGuildDto {
        DiscordGuildDto {
            guild_id: self.guild_id,
            name: self.name,
            icon_hash: self.icon_hash,
        }
    }
}

/// Guild metadata received from the Discord gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSyncParam {
    pub guild_id: u64,
    pub name: String,
    pub icon_hash: Option<String>,
}

/// Prefers `icon`, which the gateway always sends, over `icon_hash`.
fn icon_to_string(icon: Option<&ImageHash>, icon_hash: Option<&ImageHash>) -> Option<String> {
    icon.or(icon_hash).map(|i| i.to_string())
}

impl From<&Guild> for GuildSyncParam {
    fn from(guild: &Guild) -> Self {
        Self {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
            icon_hash: icon_to_string(guild.icon.as_ref(), guild.icon_hash.as_ref()),
        }
    }
}

impl From<&PartialGuild> for GuildSyncParam {
    fn from(guild: &PartialGuild) -> Self {
        Self {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
            icon_hash: icon_to_string(guild.icon.as_ref(), guild.icon_hash.as_ref()),
        }
    }
}

/// A guild with its reviews (newest first) and their statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuildDetail {
    pub guild: DiscordGuild,
    pub stats: ReviewStats,
    pub reviews: Vec<Review>,
}

impl DiscordGuildDetail {
    pub fn new(guild: DiscordGuild, reviews: Vec<Review>) -> Self {
        Self {
            guild,
            stats: ReviewStats::from_reviews(&reviews),
            reviews,
        }
    }

    pub fn into_dto(self) -> DiscordGuildDetailDto {
        DiscordGuildDetailDto {
            guild: self.guild.into_dto(),
            review_count: self.stats.count,
            average_rating: self.stats.average_rating,
            reviews: self.reviews.into_iter().map(Review::into_dto).collect(),
        }
    }
}
