use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{discord_guild::DiscordGuildRepository, review::ReviewRepository},
    error::AppError,
    model::review::{CreateReviewParams, Review, SERVER_NOT_FOUND},
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review for a known guild.
    ///
    /// # Returns
    /// - `Ok(Review)` - Review persisted
    /// - `Err(AppError::NotFound)` - The guild is unknown
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        let guild_repo = DiscordGuildRepository::new(self.db);
        let review_repo = ReviewRepository::new(self.db);

        if guild_repo.find_by_guild_id(params.guild_id).await?.is_none() {
            return Err(AppError::NotFound(SERVER_NOT_FOUND.to_string()));
        }

        let review = review_repo.create(params).await?;

        tracing::info!(
            "Created review {} for guild {} with rating {}",
            review.id,
            review.guild_id,
            review.rating
        );

        Ok(review)
    }
}
