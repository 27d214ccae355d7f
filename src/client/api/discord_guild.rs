use crate::{
    client::model::error::ApiError,
    model::discord::{DiscordGuildDetailDto, DiscordGuildDto},
};

use super::helper::{get, parse_response, send_request};

/// Get every guild that can be reviewed
pub async fn get_all_discord_guilds() -> Result<Vec<DiscordGuildDto>, ApiError> {
    let response = send_request(get("/api/guilds")).await?;
    parse_response(response).await
}

/// Get a guild with its reviews and rating statistics
pub async fn get_discord_guild_detail(guild_id: &str) -> Result<DiscordGuildDetailDto, ApiError> {
    let url = format!("/api/guilds/{}", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
