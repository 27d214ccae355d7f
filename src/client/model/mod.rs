pub mod error;
pub mod guild_options;
pub mod review_form;
