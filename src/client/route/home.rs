use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        router::Route,
    },
    model::discord::DiscordGuildDto,
};

#[cfg(feature = "web")]
use crate::client::api::get_all_discord_guilds;
#[cfg(not(feature = "web"))]
use crate::client::model::error::ApiError;

#[component]
pub fn Home() -> Element {
    #[cfg(feature = "web")]
    let guilds = use_resource(get_all_discord_guilds);
    #[cfg(feature = "web")]
    let guilds = guilds.read().as_ref().cloned();
    #[cfg(not(feature = "web"))]
    let guilds: Option<Result<Vec<DiscordGuildDto>, ApiError>> = None;

    rsx! {
        Title { "{SITE_NAME}" }
        match guilds {
            None => rsx! { LoadingPage {} },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Some(Ok(guilds)) => rsx! {
                Page {
                    class: "flex flex-col gap-4 items-center",
                    h1 { class: "text-2xl font-bold", "Servers" }
                    if guilds.is_empty() {
                        p { class: "opacity-70", "No servers to review yet." }
                    }
                    ul {
                        class: "flex flex-col gap-2 w-full max-w-xl",
                        for guild in guilds {
                            GuildListItem { key: "{guild.guild_id}", guild }
                        }
                    }
                    Link {
                        to: Route::Report {},
                        class: "btn btn-primary",
                        "Write a review"
                    }
                }
            },
        }
    }
}

#[component]
fn GuildListItem(guild: DiscordGuildDto) -> Element {
    let icon_url = guild.icon_url();

    rsx! {
        li {
            Link {
                to: Route::Server { guild_id: guild.guild_id.to_string() },
                class: "flex items-center gap-3 p-3 rounded-lg bg-base-200 hover:bg-base-300",
                if let Some(url) = icon_url {
                    img { class: "w-10 h-10 rounded-full", src: "{url}" }
                } else {
                    div { class: "w-10 h-10 rounded-full bg-base-300" }
                }
                span { "{guild.name}" }
            }
        }
    }
}
