//! Review domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::review::{CreateReviewDto, ReviewDto},
    server::error::AppError,
};

/// Message returned when a review names a server that does not exist.
pub const SERVER_NOT_FOUND: &str = "Server not found";

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub guild_id: u64,
    pub rating: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id as u64,
            rating: entity.rating,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            guild_id: self.guild_id,
            rating: self.rating,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

/// Validated parameters for creating a review.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReviewParams {
    pub guild_id: u64,
    pub rating: i32,
    pub description: String,
}

/// Applies the submission schema and resolves the server id.
///
/// # Returns
/// - `Ok(CreateReviewParams)` - Submission is valid
/// - `Err(AppError::BadRequest)` - Schema violations, messages joined with `"; "`
/// - `Err(AppError::NotFound)` - `server_id` is not a Discord snowflake
impl TryFrom<CreateReviewDto> for CreateReviewParams {
    type Error = AppError;

    fn try_from(dto: CreateReviewDto) -> Result<Self, Self::Error> {
        dto.validate()
            .map_err(|errors| AppError::BadRequest(errors.to_string()))?;

        let guild_id = dto
            .server_id
            .trim()
            .parse::<u64>()
            .map_err(|_| AppError::NotFound(SERVER_NOT_FOUND.to_string()))?;

        Ok(Self {
            guild_id,
            rating: dto.rating,
            description: dto.description.trim().to_string(),
        })
    }
}

/// Aggregate rating of a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewStats {
    pub count: u64,
    /// Mean rating, `None` without reviews.
    pub average_rating: Option<f64>,
}

impl ReviewStats {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let count = reviews.len() as u64;
        let average_rating = if reviews.is_empty() {
            None
        } else {
            let total: i64 = reviews.iter().map(|r| r.rating as i64).sum();
            Some(total as f64 / count as f64)
        };

        Self {
            count,
            average_rating,
        }
    }
}
