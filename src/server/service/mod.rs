//! Business logic between controllers and repositories.

pub mod discord;
pub mod review;

#[cfg(test)]
mod test;
