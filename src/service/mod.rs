//! Game operations behind the Discord handlers.
//!
//! Services load state through the caches, apply the rules from [`crate::model`]
//! and persist the result. They never talk to Discord; the bot layer renders
//! whatever they return.

pub mod character;
pub mod seed;
pub mod town_action;
pub mod travel;
