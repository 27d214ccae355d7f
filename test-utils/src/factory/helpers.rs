//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a guild together with one review per rating in `ratings`.
///
/// # Returns
/// - `Ok((guild, reviews))` - The guild and its reviews in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_guild_with_reviews(
    db: &DatabaseConnection,
    ratings: &[i32],
) -> Result<(entity::discord_guild::Model, Vec<entity::review::Model>), DbErr> {
    let guild = crate::factory::discord_guild::create_guild(db).await?;

    let mut reviews = Vec::with_capacity(ratings.len());
    for rating in ratings {
        let review = crate::factory::review::ReviewFactory::new(db, guild.guild_id)
            .rating(*rating)
            .build()
            .await?;
        reviews.push(review);
    }

    Ok((guild, reviews))
}
