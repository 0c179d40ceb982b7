//! Discord side of the game.
//!
//! Everything players do happens through slash commands, buttons, select menus
//! and modals. The handler turns each interaction into calls on the caches and
//! services in [`crate::state::AppState`] and renders the result as embeds.
//!
//! # Gateway Intents
//!
//! Interactions arrive without any intent. `GUILDS` is requested so the cache
//! knows the servers the bot is in, which the world statistics count and the
//! role setup uses to check that configured roles still exist.

pub mod commands;
pub mod component;
pub mod handler;
pub mod reply;
pub mod start;
