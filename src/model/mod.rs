//! Game domain models.
//!
//! Models are built from entity rows at the repository boundary and carry the
//! rules of the game: stacking items, levelling skills, walking around towns
//! and travelling between them. Nothing in here talks to Discord or the database.

pub mod character;
pub mod guild;
pub mod inventory;
pub mod item;
pub mod location;
pub mod noble_title;
pub mod settings;
pub mod skill;
pub mod stats;
pub mod town;
pub mod translation;
pub mod travel;
