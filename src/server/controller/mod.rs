//! HTTP handlers. Each handler extracts its inputs, calls a service and maps the result to
//! a JSON response; errors are returned as `AppError`.

pub mod discord;
pub mod review;
