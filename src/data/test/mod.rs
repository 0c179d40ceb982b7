mod character;
mod inventory;
mod server_settings;
mod town;
mod translation;
