//! Repositories over the SeaORM database connection.
//!
//! Each repository borrows the connection and converts between entity rows and
//! domain models at this boundary, so callers never see `entity` types.

pub mod character;
pub mod inventory;
pub mod server_settings;
pub mod town;
pub mod translation;

#[cfg(test)]
mod test;
