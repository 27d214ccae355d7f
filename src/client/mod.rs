//! Browser client: routes, components and the API calls they make.
//!
//! API calls only exist with the `web` feature; server builds render the same components
//! without fetching.

pub mod api;
pub mod app;
pub mod component;
pub mod constant;
pub mod model;
pub mod route;
pub mod router;

pub use app::App;
