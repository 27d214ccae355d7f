use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::review::CreateReviewDto,
    server::{
        error::AppError,
        model::review::{CreateReviewParams, SERVER_NOT_FOUND},
        service::review::ReviewService,
    },
};

fn params(guild_id: u64, rating: i32) -> CreateReviewParams {
    CreateReviewParams {
        guild_id,
        rating,
        description: "Active community".to_string(),
    }
}

/// Tests creating a review for a known guild.
///
/// Expected: Ok with the review persisted
#[tokio::test]
async fn creates_review_for_known_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let service = ReviewService::new(db);
    let review = service.create(params(guild.guild_id as u64, 5)).await?;

    assert_eq!(review.guild_id, guild.guild_id as u64);
    assert_eq!(review.rating, 5);
    assert_eq!(review.description, "Active community");

    Ok(())
}

/// Tests creating a review for a guild the bot never saw.
///
/// Expected: Err(NotFound("Server not found")) and nothing persisted
#[tokio::test]
async fn rejects_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReviewService::new(db);
    let result = service.create(params(123, 3)).await;

    assert!(matches!(result, Err(AppError::NotFound(ref m)) if m == SERVER_NOT_FOUND));

    let stored = crate::server::data::review::ReviewRepository::new(db)
        .get_by_guild_id(123)
        .await?;
    assert!(stored.is_empty());

    Ok(())
}

/// Tests the full path from the submitted payload to a stored review.
///
/// Expected: Ok with the trimmed description stored
#[tokio::test]
async fn creates_review_from_submitted_payload() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let payload = CreateReviewDto {
        server_id: guild.guild_id.to_string(),
        rating: 0,
        description: " Quiet lately ".to_string(),
    };

    let params = CreateReviewParams::try_from(payload)?;
    let review = ReviewService::new(db).create(params).await?;

    assert_eq!(review.rating, 0);
    assert_eq!(review.description, "Quiet lately");

    Ok(())
}
