use sea_orm::DatabaseConnection;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// bcrypt work factor applied when hashing passwords
    pub bcrypt_cost: u32,
}

impl From<(DatabaseConnection, u32)> for AppState {
    fn from((db, bcrypt_cost): (DatabaseConnection, u32)) -> Self {
        Self { db, bcrypt_cost }
    }
}
