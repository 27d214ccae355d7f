//! Discord bot keeping the list of reviewable servers current.
//!
//! The bot connects to the gateway during server startup and runs in its own tokio task.
//! Every guild it is a member of is upserted when it becomes available and again whenever
//! its name or icon changes, so the review form only offers servers the bot has seen.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is required; it is not privileged.

pub mod handler;
pub mod start;
