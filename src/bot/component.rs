//! Custom IDs of buttons, select menus and modals.
//!
//! Every component the bot sends carries one of these IDs. Parsing them into
//! [`Component`] keeps the string formats in one place; handlers only match on
//! the enum.

use crate::model::{
    guild::Guild,
    location::{LocationAction, SpecialLocation},
    settings::ChatRoomType,
};

const SETUP_LANGUAGE: &str = "ff-setup-language";
const START_JOURNEY: &str = "ff-start-journey";
const WORLD_STATISTICS: &str = "ff-world-statistics";
const SYSTEM_ANNOUNCEMENT: &str = "ff-setup-advanced-system-announcement";
const SYSTEM_ANNOUNCEMENT_DEACTIVATE: &str = "ff-setup-advanced-system-announcement-deactivate";
const SYSTEM_ANNOUNCEMENT_CHANNEL: &str = "ff-setup-advanced-system-announcement-channel";
const ROLES: &str = "ff-setup-advanced-roles";
const ROLES_SELECT: &str = "ff-setup-advanced-roles-select";
const ROLES_CREATE: &str = "ff-setup-advanced-roles-select-create-";
const ROLES_ROLE: &str = "ff-setup-advanced-roles-select-role-";
const CHAT_ROOMS: &str = "ff-setup-advanced-chatrooms";
const CHAT_ROOMS_SELECT: &str = "ff-setup-advanced-chatrooms-select";
const CHAT_ROOM_CHANNEL: &str = "ff-setup-advanced-chatrooms-channel-";
const KEEP_LANGUAGE: &str = "ff-char-lang-setup-keep";
const CHARACTER_LANGUAGE: &str = "ff-char-lang-setup-language";
const CHARACTER_CREATOR: &str = "ff-character-creator-";
const STARTER_SKILL: &str = "ff-char-starter-skill-select";
const TOWN_MENU: &str = "ff-town-menu";
const TRAVEL: &str = "ff-town-menu-travel";
const WALK: &str = "ff-town-menu-walk-";
const ACTION: &str = "ff-town-menu-action-";
const TRAVEL_SELECT: &str = "ff-menu-travel-select";
const BACKPACK: &str = "ff-backpack-";

/// Input field IDs of the character creation modal.
pub const FIRST_NAME_INPUT: &str = "firstname";
pub const LAST_NAME_INPUT: &str = "lastname";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    SetupLanguage,
    StartJourney,
    WorldStatistics,
    SystemAnnouncement,
    SystemAnnouncementDeactivate,
    SystemAnnouncementChannel,
    Roles,
    RolesSelect,
    RolesCreate(Guild),
    RolesRole(Guild),
    ChatRooms,
    ChatRoomsSelect,
    ChatRoomChannel(ChatRoomType),
    KeepLanguage,
    CharacterLanguage,
    /// Character creation modal, opened in the chosen language.
    CharacterCreator(String),
    StarterSkill,
    TownMenu,
    Travel,
    Walk(SpecialLocation),
    Action(LocationAction),
    TravelSelect,
    /// Backpack page, starting at 1.
    Backpack(usize),
}

impl Component {
    pub fn id(&self) -> String {
        match self {
            Component::SetupLanguage => SETUP_LANGUAGE.to_string(),
            Component::StartJourney => START_JOURNEY.to_string(),
            Component::WorldStatistics => WORLD_STATISTICS.to_string(),
            Component::SystemAnnouncement => SYSTEM_ANNOUNCEMENT.to_string(),
            Component::SystemAnnouncementDeactivate => SYSTEM_ANNOUNCEMENT_DEACTIVATE.to_string(),
            Component::SystemAnnouncementChannel => SYSTEM_ANNOUNCEMENT_CHANNEL.to_string(),
            Component::Roles => ROLES.to_string(),
            Component::RolesSelect => ROLES_SELECT.to_string(),
            Component::RolesCreate(guild) => {
                format!("{}{}", ROLES_CREATE, guild.name().to_lowercase())
            }
            Component::RolesRole(guild) => format!("{}{}", ROLES_ROLE, guild.name().to_lowercase()),
            Component::ChatRooms => CHAT_ROOMS.to_string(),
            Component::ChatRoomsSelect => CHAT_ROOMS_SELECT.to_string(),
            Component::ChatRoomChannel(room) => {
                format!("{}{}", CHAT_ROOM_CHANNEL, room.name().to_lowercase())
            }
            Component::KeepLanguage => KEEP_LANGUAGE.to_string(),
            Component::CharacterLanguage => CHARACTER_LANGUAGE.to_string(),
            Component::CharacterCreator(language) => format!("{}{}", CHARACTER_CREATOR, language),
            Component::StarterSkill => STARTER_SKILL.to_string(),
            Component::TownMenu => TOWN_MENU.to_string(),
            Component::Travel => TRAVEL.to_string(),
            Component::Walk(special) => format!("{}{}", WALK, special.name()),
            Component::Action(action) => format!("{}{}", ACTION, action.name()),
            Component::TravelSelect => TRAVEL_SELECT.to_string(),
            Component::Backpack(page) => format!("{}{}", BACKPACK, page),
        }
    }

    /// Parses a custom ID, `None` for IDs this bot did not send.
    pub fn parse(id: &str) -> Option<Self> {
        let exact = match id {
            SETUP_LANGUAGE => Some(Component::SetupLanguage),
            START_JOURNEY => Some(Component::StartJourney),
            WORLD_STATISTICS => Some(Component::WorldStatistics),
            SYSTEM_ANNOUNCEMENT => Some(Component::SystemAnnouncement),
            SYSTEM_ANNOUNCEMENT_DEACTIVATE => Some(Component::SystemAnnouncementDeactivate),
            SYSTEM_ANNOUNCEMENT_CHANNEL => Some(Component::SystemAnnouncementChannel),
            ROLES => Some(Component::Roles),
            ROLES_SELECT => Some(Component::RolesSelect),
            CHAT_ROOMS => Some(Component::ChatRooms),
            CHAT_ROOMS_SELECT => Some(Component::ChatRoomsSelect),
            KEEP_LANGUAGE => Some(Component::KeepLanguage),
            CHARACTER_LANGUAGE => Some(Component::CharacterLanguage),
            STARTER_SKILL => Some(Component::StarterSkill),
            TOWN_MENU => Some(Component::TownMenu),
            TRAVEL => Some(Component::Travel),
            TRAVEL_SELECT => Some(Component::TravelSelect),
            _ => None,
        };
        if exact.is_some() {
            return exact;
        }

        if let Some(guild) = id.strip_prefix(ROLES_CREATE) {
            return guild.parse().ok().map(Component::RolesCreate);
        }
        if let Some(guild) = id.strip_prefix(ROLES_ROLE) {
            return guild.parse().ok().map(Component::RolesRole);
        }
        if let Some(room) = id.strip_prefix(CHAT_ROOM_CHANNEL) {
            return room.parse().ok().map(Component::ChatRoomChannel);
        }
        if let Some(language) = id.strip_prefix(CHARACTER_CREATOR) {
            return (!language.is_empty())
                .then(|| Component::CharacterCreator(language.to_string()));
        }
        if let Some(special) = id.strip_prefix(WALK) {
            return special.parse().ok().map(Component::Walk);
        }
        if let Some(action) = id.strip_prefix(ACTION) {
            return action.parse().ok().map(Component::Action);
        }
        if let Some(page) = id.strip_prefix(BACKPACK) {
            return page.parse().ok().map(Component::Backpack);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_what_it_renders() {
        let components = [
            Component::SetupLanguage,
            Component::SystemAnnouncementDeactivate,
            Component::RolesSelect,
            Component::RolesCreate(Guild::HerbologiesGuild),
            Component::RolesRole(Guild::MerchantsGuild),
            Component::ChatRoomChannel(ChatRoomType::Town),
            Component::CharacterCreator("de-DE".to_string()),
            Component::TownMenu,
            Component::Travel,
            Component::Walk(SpecialLocation::HerbGarden),
            Component::Action(LocationAction::JoinGuild),
            Component::Backpack(3),
        ];

        for component in components {
            assert_eq!(Component::parse(&component.id()), Some(component));
        }
    }

    #[test]
    fn uses_stable_ids() {
        assert_eq!(
            Component::RolesCreate(Guild::AdventurersGuild).id(),
            "ff-setup-advanced-roles-select-create-adventurers_guild"
        );
        assert_eq!(
            Component::Walk(SpecialLocation::Port).id(),
            "ff-town-menu-walk-PORT"
        );
        assert_eq!(
            Component::Action(LocationAction::HarvestGarden).id(),
            "ff-town-menu-action-HARVEST_GARDEN"
        );
        assert_eq!(Component::Backpack(0).id(), "ff-backpack-0");
    }

    #[test]
    fn prefers_exact_ids_over_prefixes() {
        assert_eq!(
            Component::parse("ff-setup-advanced-roles-select"),
            Some(Component::RolesSelect)
        );
        assert_eq!(
            Component::parse("ff-town-menu-travel"),
            Some(Component::Travel)
        );
    }

    #[test]
    fn ignores_unknown_ids() {
        assert_eq!(Component::parse("other-bot-button"), None);
        assert_eq!(Component::parse("ff-town-menu-walk-NOWHERE"), None);
        assert_eq!(Component::parse("ff-town-menu-action-join_guild"), None);
        assert_eq!(Component::parse("ff-backpack-next"), None);
        assert_eq!(Component::parse("ff-character-creator-"), None);
    }
}
