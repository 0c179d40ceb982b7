use super::*;

/// Tests collecting the roles of one guild across servers.
///
/// Expected: Ok with one entry per server that mapped the guild
#[tokio::test]
async fn gets_roles_across_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerSettingsRepository::new(db);
    repo.set_guild_role(1, Guild::HerbologiesGuild, 11).await?;
    repo.set_guild_role(2, Guild::HerbologiesGuild, 21).await?;
    repo.set_guild_role(2, Guild::MerchantsGuild, 22).await?;

    let mut roles = repo.guild_roles_for(Guild::HerbologiesGuild).await?;
    roles.sort_by_key(|role| role.guild_id);

    assert_eq!(roles.len(), 2);
    assert_eq!((roles[0].guild_id, roles[0].role_id), (1, 11));
    assert_eq!((roles[1].guild_id, roles[1].role_id), (2, 21));
    assert!(repo
        .guild_roles_for(Guild::AdventurersGuild)
        .await?
        .is_empty());

    Ok(())
}
