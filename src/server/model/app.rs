use sea_orm::DatabaseConnection;

use crate::server::util::{functions::FunctionsClient, storage::FsBlobStore};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub functions: FunctionsClient,
    pub storage: FsBlobStore,
}
