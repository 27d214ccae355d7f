use dioxus_logger::tracing;
use serenity::all::Ready;

/// Logs the connection; guilds arrive afterwards as `guild_create` events.
pub async fn handle_ready(ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guilds",
        ready.user.name,
        ready.guilds.len()
    );
}
