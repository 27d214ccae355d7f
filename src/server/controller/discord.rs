use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::discord::DiscordGuildDto,
    server::{
        error::AppError, model::discord::DiscordGuild, service::discord::DiscordGuildService,
        state::AppState,
    },
};

pub async fn get_all_discord_guilds(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let guild_service = DiscordGuildService::new(&state.db);

    let guilds: Vec<DiscordGuildDto> = guild_service
        .get_all()
        .await?
        .into_iter()
        .map(DiscordGuild::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(guilds)))
}

/// The id is taken as a string so that a malformed id reads as an unknown guild.
pub async fn get_discord_guild_detail(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let not_found = || AppError::NotFound(format!("Server {} not found", guild_id));

    let id = guild_id.parse::<u64>().map_err(|_| not_found())?;

    let guild_service = DiscordGuildService::new(&state.db);

    let Some(detail) = guild_service.get_detail(id).await? else {
        return Err(not_found());
    };

    Ok((StatusCode::OK, Json(detail.into_dto())))
}
