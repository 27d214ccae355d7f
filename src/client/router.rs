use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Home, NotFound, Report, Server};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/report")]
    Report {},

    #[route("/server/:guild_id")]
    Server { guild_id: String },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
