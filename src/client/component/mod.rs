pub mod form_field;
pub mod header;
pub mod layout;
pub mod page;
pub mod star_rating;

pub use form_field::FormField;
pub use header::Header;
pub use layout::Layout;
pub use page::{ErrorPage, LoadingPage, Page};
pub use star_rating::{StarDisplay, StarRating};
