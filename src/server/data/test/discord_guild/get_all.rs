use super::*;

/// Tests that every guild is returned, ordered by name.
///
/// Expected: Ok with guilds sorted alphabetically
#[tokio::test]
async fn returns_guilds_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "Alpha", "Bravo"] {
        factory::discord_guild::DiscordGuildFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = DiscordGuildRepository::new(db);
    let guilds = repo.get_all().await?;

    let names: Vec<&str> = guilds.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);

    Ok(())
}

/// Tests getting guilds from an empty table.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn returns_empty_without_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);
    let guilds = repo.get_all().await?;

    assert!(guilds.is_empty());

    Ok(())
}
