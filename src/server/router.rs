use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        discord::{get_all_discord_guilds, get_discord_guild_detail},
        review::create_review,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/guilds", get(get_all_discord_guilds))
        .route("/api/guilds/{guild_id}", get(get_discord_guild_detail))
        .route("/api/reviews", post(create_review))
}
