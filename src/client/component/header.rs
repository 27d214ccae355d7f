use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaPen, Icon};

use crate::client::{constant::SITE_NAME, router::Route};

#[component]
pub fn Header() -> Element {
    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                p {
                    class: "md:text-xl text-wrap",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            Link {
                to: Route::Report {},
                class: "btn btn-outline flex gap-2 items-center",
                Icon {
                    width: 18,
                    height: 18,
                    icon: FaPen
                }
                p {
                    "Write a review"
                }
            }
        }
    })
}
