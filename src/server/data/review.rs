use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::review::{CreateReviewParams, Review};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a review stamped with the current time.
    ///
    /// The guild must exist; a missing guild violates the foreign key.
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(params.guild_id as i64),
            rating: ActiveValue::Set(params.rating),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    /// Gets all reviews of a guild, newest first.
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::GuildId.eq(guild_id as i64))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }
}
