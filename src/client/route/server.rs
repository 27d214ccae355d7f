use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page, StarDisplay},
        constant::SITE_NAME,
        router::Route,
    },
    model::{discord::DiscordGuildDetailDto, review::ReviewDto},
};

#[cfg(feature = "web")]
use crate::client::api::get_discord_guild_detail;
#[cfg(not(feature = "web"))]
use crate::client::model::error::ApiError;

/// Detail page of a single server: rating summary and every review, newest first.
#[component]
pub fn Server(guild_id: String) -> Element {
    #[cfg(feature = "web")]
    let detail = use_resource(use_reactive!(|guild_id| async move {
        get_discord_guild_detail(&guild_id).await
    }));
    #[cfg(feature = "web")]
    let detail = detail.read().as_ref().cloned();
    #[cfg(not(feature = "web"))]
    let detail: Option<Result<DiscordGuildDetailDto, ApiError>> = None;

    match detail {
        None => rsx! { LoadingPage {} },
        Some(Err(err)) => rsx! {
            Title { "{SITE_NAME}" }
            ErrorPage { status: err.status, message: err.message }
        },
        Some(Ok(detail)) => rsx! {
            Title { "{detail.guild.name} | {SITE_NAME}" }
            GuildDetail { detail }
        },
    }
}

#[component]
fn GuildDetail(detail: DiscordGuildDetailDto) -> Element {
    let summary = match detail.average_rating {
        Some(average) => format!("{:.1} / 5 from {} reviews", average, detail.review_count),
        None => "No reviews yet".to_string(),
    };
    let rounded = detail.average_rating.map(|a| a.round() as i32).unwrap_or(0);

    rsx! {
        Page {
            class: "flex flex-col gap-6 items-center",
            div {
                class: "flex flex-col gap-2 items-center",
                if let Some(url) = detail.guild.icon_url() {
                    img { class: "w-20 h-20 rounded-full", src: "{url}" }
                }
                h1 { class: "text-2xl font-bold", "{detail.guild.name}" }
                StarDisplay { value: rounded, size: 24 }
                p { class: "opacity-70", "{summary}" }
            }
            Link {
                to: Route::Report {},
                class: "btn btn-outline",
                "Write a review"
            }
            ul {
                class: "flex flex-col gap-3 w-full max-w-xl",
                for review in detail.reviews {
                    ReviewCard { key: "{review.id}", review }
                }
            }
        }
    }
}

#[component]
fn ReviewCard(review: ReviewDto) -> Element {
    let created = review.created_at.format("%Y-%m-%d %H:%M UTC").to_string();

    rsx! {
        li {
            class: "flex flex-col gap-2 p-4 rounded-lg bg-base-200",
            div {
                class: "flex justify-between items-center",
                StarDisplay { value: review.rating }
                span { class: "text-sm opacity-60", "{created}" }
            }
            if !review.description.is_empty() {
                p { "{review.description}" }
            }
        }
    }
}
