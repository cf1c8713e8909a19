use sea_orm::DatabaseConnection;

/// Shared handler state. The connection is a pool handle, cheap to clone.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}
