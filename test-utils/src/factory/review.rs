//! Review factory for creating test review entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews attached to an existing guild.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    rating: i32,
    description: String,
    created_at: DateTime<Utc>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new factory with defaults.
    ///
    /// Defaults:
    /// - rating: `5`
    /// - description: `"Great server"`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Guild the review belongs to, must already exist
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        Self {
            db,
            guild_id,
            rating: 5,
            description: "Great server".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            rating: ActiveValue::Set(self.rating),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values for the given guild.
pub async fn create_review(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, guild_id).build().await
}
