use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{FormField, Page, StarRating},
        constant::SITE_NAME,
        model::{
            error::ApiError,
            guild_options::GuildOptions,
            review_form::{ReviewForm, SubmitOutcome},
        },
        router::Route,
    },
    model::review::{CreateReviewDto, ReviewDto, ReviewField},
};

#[cfg(feature = "web")]
use crate::client::api::{create_review, get_all_discord_guilds};

/// Review submission form: pick a server, rate it and describe why.
#[component]
pub fn Report() -> Element {
    let mut review_form = use_signal(ReviewForm::default);
    let nav = navigator();

    #[cfg(feature = "web")]
    let guilds = use_resource(get_all_discord_guilds);
    #[cfg(feature = "web")]
    let guild_options = guilds.read().as_ref().cloned().map(GuildOptions::from);
    #[cfg(not(feature = "web"))]
    let guild_options: Option<GuildOptions> = None;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(payload) = review_form.write().begin_submit() else {
            return;
        };

        spawn(async move {
            let result = send_review(&payload).await;

            let outcome = review_form.write().finish_submit(result);

            match outcome {
                SubmitOutcome::Redirect { server_id } => {
                    tracing::info!("Review submitted for server {}", server_id);
                    nav.push(Route::Server {
                        guild_id: server_id,
                    });
                }
                SubmitOutcome::Rejected => {
                    tracing::warn!("Review submission for server {} rejected", payload.server_id);
                }
                SubmitOutcome::Blocked => {}
            }
        });
    };

    let (values, server_error, rating_error, description_error, is_submitting) = {
        let state = review_form.read();
        (
            state.values().clone(),
            state.error(ReviewField::ServerId).map(str::to_string),
            state.error(ReviewField::Rating).map(str::to_string),
            state.error(ReviewField::Description).map(str::to_string),
            state.is_submitting(),
        )
    };

    rsx! {
        Title { "Write a review | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            form {
                class: "space-y-8 w-full max-w-xl",
                onsubmit: on_submit,
                FormField {
                    label: "Server",
                    description: "The server you want to review",
                    error: server_error,
                    ServerSelect {
                        options: guild_options,
                        value: values.server_id.clone(),
                        on_change: move |server_id: String| review_form.write().set_server_id(server_id),
                    }
                }
                FormField {
                    label: "Server rating",
                    description: "Rate the quality of what the server offers",
                    error: rating_error,
                    StarRating {
                        value: values.rating,
                        on_change: move |rating: i32| review_form.write().set_rating(rating),
                    }
                }
                FormField {
                    label: "Description",
                    description: "Add anything that may help other users",
                    error: description_error,
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        placeholder: "Why this rating?",
                        value: "{values.description}",
                        oninput: move |e: FormEvent| review_form.write().set_description(e.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: is_submitting,
                    if is_submitting {
                        span { class: "loading loading-spinner loading-sm" }
                        "Sending"
                    } else {
                        "Send"
                    }
                }
            }
        }
    }
}

/// Server selector; disabled while loading and whenever the guild list failed to load, in
/// which case only the placeholder is listed.
#[component]
fn ServerSelect(
    options: Option<GuildOptions>,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    let available = options.as_ref().is_some_and(GuildOptions::is_available);
    let placeholder = options
        .as_ref()
        .map(GuildOptions::placeholder)
        .unwrap_or("Loading servers...");
    let guilds = options
        .as_ref()
        .map(|o| o.selectable().to_vec())
        .unwrap_or_default();

    rsx! {
        select {
            class: "select select-bordered w-full",
            disabled: !available,
            onchange: move |e| on_change.call(e.value()),
            option {
                value: "",
                disabled: true,
                selected: value.is_empty() || !available,
                "{placeholder}"
            }
            for guild in guilds {
                option {
                    key: "{guild.guild_id}",
                    value: "{guild.guild_id}",
                    selected: available && guild.guild_id.to_string() == value,
                    "{guild.name}"
                }
            }
        }
    }
}

#[cfg(feature = "web")]
async fn send_review(payload: &CreateReviewDto) -> Result<ReviewDto, ApiError> {
    create_review(payload).await
}

/// Submissions only happen in the browser; other renderers never reach the network.
#[cfg(not(feature = "web"))]
async fn send_review(_payload: &CreateReviewDto) -> Result<ReviewDto, ApiError> {
    Err(ApiError::new(503, "Reviews can only be submitted from the browser"))
}
