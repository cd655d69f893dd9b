use sea_orm::{Database, DatabaseConnection, DbErr};

/// Opens the database connection for the process. The caller owns the
/// connection and passes it down to the services; nothing in this crate
/// holds global state.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
