use sea_orm::DatabaseConnection;

/// State shared by every request handler
///
/// The connection is the only handle to persisted state; handlers borrow it for the duration
/// of a single request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
