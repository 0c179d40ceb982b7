use sea_orm::DatabaseConnection;

use crate::{config::Config, error::AppError, state::AppState};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the schema is up-to-date before any
/// cache is loaded.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared state and fills the caches that are read on every interaction.
///
/// Towns and translations are loaded completely; characters and server settings
/// are loaded lazily on first use. Only the character counter is read up front
/// for the world statistics.
pub async fn load_state(db: DatabaseConnection) -> Result<AppState, AppError> {
    let state = AppState::new(db);

    let towns = state.towns.load_all(&state.db).await?;
    let translations = state.translations.load_all(&state.db).await?;
    let characters = state.characters.load_statistics().await?;

    if towns == 0 {
        tracing::warn!("No towns loaded, run the `migrate` command to import the world");
    }

    tracing::info!(
        "Loaded {} towns, {} messages in {} languages, {} characters exist",
        towns,
        translations,
        state.translations.languages().len(),
        characters
    );

    Ok(state)
}
