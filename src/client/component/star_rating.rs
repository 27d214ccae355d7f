use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaStar, Icon};

use crate::model::review::MAX_RATING;

/// Clickable row of `MAX_RATING` stars with the first `value` highlighted.
///
/// Clicking the currently selected star clears the rating back to zero.
#[component]
pub fn StarRating(
    value: i32,
    on_change: EventHandler<i32>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-1",
            for star in 1..=MAX_RATING {
                button {
                    key: "{star}",
                    r#type: "button",
                    class: "btn btn-ghost btn-sm px-1",
                    title: "{star} / {MAX_RATING}",
                    disabled,
                    onclick: move |_| {
                        on_change.call(if star == value { 0 } else { star });
                    },
                    StarIcon { filled: star <= value, size: 24 }
                }
            }
        }
    }
}

/// Read-only star row, used for stored reviews and averages.
#[component]
pub fn StarDisplay(value: i32, #[props(default = 16)] size: u32) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-1",
            title: "{value} / {MAX_RATING}",
            for star in 1..=MAX_RATING {
                StarIcon { key: "{star}", filled: star <= value, size }
            }
        }
    }
}

#[component]
fn StarIcon(filled: bool, size: u32) -> Element {
    let class = if filled { "text-warning" } else { "opacity-25" };

    rsx! {
        Icon {
            width: size,
            height: size,
            class: class.to_string(),
            icon: FaStar
        }
    }
}
