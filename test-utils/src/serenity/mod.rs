//! Test factories for creating Serenity API objects.
//!
//! Serenity structs are built by deserializing JSON shaped like Discord's API payloads,
//! which keeps them valid without depending on private constructors.
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_guild;
//!
//! let guild = create_test_guild(123456789, "Test Guild", Some("abc123"));
//! ```

pub mod guild;

pub use guild::create_test_guild;
