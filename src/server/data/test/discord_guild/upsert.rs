use super::*;
use sea_orm::PaginatorTrait;

/// Tests upserting a new Discord guild.
///
/// Expected: Ok with guild created from the gateway data
#[tokio::test]
async fn upserts_new_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = create_test_guild(123456789, "Test Guild", Some("abc123"));

    let repo = DiscordGuildRepository::new(db);
    let upserted = repo.upsert(GuildSyncParam::from(&guild)).await?;

    assert_eq!(upserted.guild_id, 123456789);
    assert_eq!(upserted.name, "Test Guild");
    assert_eq!(
        upserted.icon_hash,
        Some("abc12300000000000000000000000000".to_string())
    );

    let db_guild = entity::prelude::DiscordGuild::find_by_id(123456789_i64)
        .one(db)
        .await?;
    assert!(db_guild.is_some());

    Ok(())
}

/// Tests upserting updates an existing guild rather than duplicating it.
///
/// Expected: Ok with name and icon replaced, sync time advanced, one row
#[tokio::test]
async fn updates_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id(123456789)
        .name("Old Name")
        .icon_hash(Some("old_icon".to_string()))
        .build()
        .await?;

    let guild = create_test_guild(123456789, "New Name", Some("abcdef12"));

    let repo = DiscordGuildRepository::new(db);
    let upserted = repo.upsert(GuildSyncParam::from(&guild)).await?;

    assert_eq!(upserted.name, "New Name");
    assert_eq!(
        upserted.icon_hash,
        Some("abcdef12000000000000000000000000".to_string())
    );
    assert!(upserted.last_sync_at >= existing.last_sync_at);

    let count = entity::prelude::DiscordGuild::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that a removed icon is cleared on upsert.
///
/// Expected: Ok with None icon_hash
#[tokio::test]
async fn clears_removed_icon() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id(42)
        .icon_hash(Some("old_icon".to_string()))
        .build()
        .await?;

    let repo = DiscordGuildRepository::new(db);
    let upserted = repo
        .upsert(GuildSyncParam {
            guild_id: 42,
            name: "No Icon Guild".to_string(),
            icon_hash: None,
        })
        .await?;

    assert_eq!(upserted.icon_hash, None);

    Ok(())
}
