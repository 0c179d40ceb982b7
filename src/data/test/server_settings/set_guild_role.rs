use super::*;

/// Tests mapping a guild to a role and remapping it.
///
/// Expected: Ok with one mapping holding the latest role
#[tokio::test]
async fn sets_and_replaces_guild_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerSettingsRepository::new(db);
    repo.upsert(&ServerSettings::new(10)).await?;

    repo.set_guild_role(10, Guild::MerchantsGuild, 100).await?;
    repo.set_guild_role(10, Guild::MerchantsGuild, 101).await?;

    let settings = repo.find(10).await?.unwrap();
    assert_eq!(settings.guild_roles.len(), 1);
    assert_eq!(settings.guild_role(Guild::MerchantsGuild), Some(101));

    Ok(())
}
