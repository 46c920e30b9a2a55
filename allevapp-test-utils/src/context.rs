//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! Holds the in-memory SQLite database, a session backed by `MemoryStore`, the mock server
//! standing in for the serverless functions endpoint and a temporary blob storage directory
//! that is removed when the context is dropped.

use std::{path::Path, sync::Arc};

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for authentication flows
    pub session: Session,

    /// Mock HTTP server for the serverless functions
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
    storage_dir: TempDir,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;
        let storage_dir = tempfile::tempdir()?;

        Ok(Self {
            db,
            session,
            server,
            mocks: Vec::new(),
            storage_dir,
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Base URL functions are invoked under, e.g. `{url}/send-quote-email`.
    pub fn functions_url(&self) -> String {
        self.server.url()
    }

    /// Root directory of the temporary blob store.
    pub fn storage_path(&self) -> &Path {
        self.storage_dir.path()
    }

    /// Access to the mock server for creating endpoints after the build phase.
    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
