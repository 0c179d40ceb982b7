//! Factory methods for creating test data.
//!
//! Each table has a `Factory` builder for customization and a `create_*`
//! function for quick default creation. Rows are inserted directly through
//! ActiveModels, bypassing the repositories under test.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let town = factory::create_town(&db).await?;
//! let character = factory::character::CharacterFactory::new(&db)
//!     .location(&town.name)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `character` - Character rows with skills and guild memberships
//! - `town` - Town rows with connections
//! - `server_settings` - Server settings and guild roles
//! - `translation` - Translated messages
//! - `helpers` - Unique id generation

pub mod character;
pub mod helpers;
pub mod server_settings;
pub mod town;
pub mod translation;

pub use character::create_character;
pub use server_settings::{create_guild_role, create_server_settings};
pub use town::{create_connection, create_town};
pub use translation::create_translation;
