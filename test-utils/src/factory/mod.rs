//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand that
//! inserts a row with defaults.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guild = factory::create_guild(&db).await?;
//! let review = factory::review::ReviewFactory::new(&db, guild.guild_id)
//!     .rating(4)
//!     .description("Friendly staff")
//!     .build()
//!     .await?;
//! ```

pub mod discord_guild;
pub mod helpers;
pub mod review;

pub use discord_guild::create_guild;
pub use review::create_review;
