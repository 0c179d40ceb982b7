use super::*;

/// Tests loading settings together with guild roles.
///
/// Expected: Ok(Some) with the announcement channel and roles mapped
#[tokio::test]
async fn finds_settings_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::server_settings::ServerSettingsFactory::new(db)
        .language("de-DE")
        .announcement_channel("555")
        .build()
        .await?;
    let role = factory::create_guild_role(db, &row.guild_id, "BLACKSMITHS_GUILD").await?;

    let repo = ServerSettingsRepository::new(db);
    let settings = repo.find(row.guild_id.parse().unwrap()).await?.unwrap();

    assert_eq!(settings.language, "de-DE");
    assert_eq!(settings.system_announcement.target(), Some(555));
    assert_eq!(
        settings.guild_role(Guild::BlacksmithsGuild),
        Some(role.role_id.parse().unwrap())
    );
    assert!(settings.chat_rooms.is_empty());

    Ok(())
}

/// Tests loading settings of a server that was never set up.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerSettingsRepository::new(db);

    assert!(repo.find(1).await?.is_none());

    Ok(())
}
