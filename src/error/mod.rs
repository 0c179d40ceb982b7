//! Error types shared across the bot.
//!
//! `AppError` is the top-level error returned by services, startup code and the
//! scheduler. Interaction handlers never bubble it to Discord: they log it and,
//! where a user is waiting on a reply, answer with a translated message.

pub mod config;
pub mod domain;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, domain::DomainError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Invalid game state or input rejected by the domain model.
    #[error(transparent)]
    DomainErr(#[from] DomainError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// JSON (de)serialization error for bundled world data and inventories.
    #[error(transparent)]
    SerdeErr(#[from] serde_json::Error),

    /// Invalid request error.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Returns the missing Discord permission if this error is a permission failure.
    ///
    /// Serenity reports both locally detected missing permissions (model errors) and
    /// HTTP 403 responses. Either way the user sees the permission embed.
    pub fn missing_permission(&self) -> Option<String> {
        let AppError::DiscordErr(err) = self else {
            return None;
        };

        match err.as_ref() {
            serenity::Error::Model(serenity::model::ModelError::InvalidPermissions {
                required,
                ..
            }) => Some(required.get_permission_names().join(", ")),
            serenity::Error::Http(serenity::http::HttpError::UnsuccessfulRequest(response))
                if response.status_code.as_u16() == 403 =>
            {
                Some(response.error.message.clone())
            }
            _ => None,
        }
    }
}
