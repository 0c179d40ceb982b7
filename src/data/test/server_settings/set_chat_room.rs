use super::*;

/// Tests configuring a chat room and moving it to another channel.
///
/// Expected: Ok with a single room of that type holding the latest channel
#[tokio::test]
async fn sets_and_replaces_chat_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerSettingsRepository::new(db);
    repo.upsert(&ServerSettings::new(10)).await?;

    let mut room = ChatRoom {
        room_type: ChatRoomType::Global,
        location: ChannelKind::Channel,
        channel_id: Some(30),
    };
    repo.set_chat_room(10, &room).await?;

    room.channel_id = Some(31);
    repo.set_chat_room(10, &room).await?;

    let settings = repo.find(10).await?.unwrap();
    assert_eq!(settings.chat_rooms, vec![room]);

    Ok(())
}
