use super::*;

/// Tests inserting then updating the settings row.
///
/// Expected: Ok with the latest language and announcement stored
#[tokio::test]
async fn upserts_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerSettingsRepository::new(db);

    let mut settings = ServerSettings::new(10);
    repo.upsert(&settings).await?;
    assert_eq!(repo.find(10).await?, Some(settings.clone()));

    settings.language = "de-DE".to_string();
    settings.system_announcement = SystemAnnouncement {
        kind: ChannelKind::Thread,
        channel_id: Some(20),
    };
    repo.upsert(&settings).await?;

    let stored = repo.find(10).await?.unwrap();
    assert_eq!(stored.language, "de-DE");
    assert_eq!(stored.system_announcement.kind, ChannelKind::Thread);
    assert_eq!(stored.system_announcement.target(), Some(20));

    Ok(())
}
