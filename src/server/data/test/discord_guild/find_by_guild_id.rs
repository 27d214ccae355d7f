use super::*;

/// Tests finding a guild that exists.
///
/// Expected: Ok(Some(guild))
#[tokio::test]
async fn finds_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id(123456789)
        .name("Test Guild")
        .icon_hash(Some("abc123".to_string()))
        .build()
        .await?;

    let repo = DiscordGuildRepository::new(db);
    let guild = repo.find_by_guild_id(123456789).await?.unwrap();

    assert_eq!(guild.guild_id, 123456789);
    assert_eq!(guild.name, "Test Guild");
    assert_eq!(guild.icon_hash, Some("abc123".to_string()));

    Ok(())
}

/// Tests finding a guild the bot never saw.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild(db).await?;

    let repo = DiscordGuildRepository::new(db);
    let guild = repo.find_by_guild_id(999999999).await?;

    assert!(guild.is_none());

    Ok(())
}
