use super::*;
use chrono::{Duration, Utc};

/// Tests that reviews are returned newest first.
///
/// Expected: Ok with reviews sorted by created_at descending
#[tokio::test]
async fn returns_reviews_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let now = Utc::now();
    for (days_ago, description) in [(2, "oldest"), (0, "newest"), (1, "middle")] {
        factory::review::ReviewFactory::new(db, guild.guild_id)
            .description(description)
            .created_at(now - Duration::days(days_ago))
            .build()
            .await?;
    }

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_by_guild_id(guild.guild_id as u64).await?;

    let descriptions: Vec<&str> = reviews.iter().map(|r| r.description.as_str()).collect();
    assert_eq!(descriptions, vec!["newest", "middle", "oldest"]);

    Ok(())
}

/// Tests that only reviews of the requested guild are returned.
///
/// Expected: Ok with the other guild's reviews excluded
#[tokio::test]
async fn excludes_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _) = factory::helpers::create_guild_with_reviews(db, &[5, 3]).await?;
    factory::helpers::create_guild_with_reviews(db, &[1]).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_by_guild_id(guild.guild_id as u64).await?;

    assert_eq!(reviews.len(), 2);
    assert!(reviews
        .iter()
        .all(|r| r.guild_id == guild.guild_id as u64));

    Ok(())
}

/// Tests a guild without reviews.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn returns_empty_without_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_by_guild_id(guild.guild_id as u64).await?;

    assert!(reviews.is_empty());

    Ok(())
}
