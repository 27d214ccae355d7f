use super::*;
use sea_orm::EntityTrait;

/// Tests creating a review for an existing guild.
///
/// Expected: Ok with the review persisted
#[tokio::test]
async fn creates_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParams {
            guild_id: guild.guild_id as u64,
            rating: 4,
            description: "Helpful moderators".to_string(),
        })
        .await?;

    assert_eq!(review.guild_id, guild.guild_id as u64);
    assert_eq!(review.rating, 4);
    assert_eq!(review.description, "Helpful moderators");

    let stored = entity::prelude::Review::find_by_id(review.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that a zero rating with an empty description is stored as is.
///
/// Expected: Ok with rating 0 and empty description
#[tokio::test]
async fn creates_review_with_zero_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParams {
            guild_id: guild.guild_id as u64,
            rating: 0,
            description: String::new(),
        })
        .await?;

    assert_eq!(review.rating, 0);
    assert!(review.description.is_empty());

    Ok(())
}
