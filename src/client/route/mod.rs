pub mod home;
pub mod not_found;
pub mod report;
pub mod server;

pub use home::Home;
pub use not_found::NotFound;
pub use report::Report;
pub use server::Server;
