use thiserror::Error;

/// Game rules and lookups that reject a value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// An item stack was created with an amount outside `1..=max_stack`.
    #[error("Invalid amount {amount} for {item}, must be between 1 and {max}")]
    InvalidStackAmount {
        item: String,
        amount: i64,
        max: i32,
    },

    #[error("Unknown item '{0}'")]
    UnknownItem(String),

    #[error("Unknown skill '{0}'")]
    UnknownSkill(String),

    #[error("Unknown guild '{0}'")]
    UnknownGuild(String),

    #[error("Unknown noble title '{0}'")]
    UnknownNobleTitle(String),

    #[error("Unknown location '{0}'")]
    UnknownLocation(String),

    #[error("Unknown town '{0}'")]
    UnknownTown(String),

    /// A stored server setting (announcement kind, chat room type) is not recognised.
    #[error("Unknown setting value '{0}'")]
    UnknownSetting(String),

    /// A character name part is empty or longer than 32 characters.
    #[error("Invalid character name '{0}'")]
    InvalidName(String),

    #[error("No character exists for this user")]
    NoCharacter,

    #[error("A character already exists for this user")]
    CharacterExists,

    #[error("The starter skill has already been chosen")]
    AlreadyChoseSkill,
}
