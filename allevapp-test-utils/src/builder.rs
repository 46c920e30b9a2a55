//! Declarative test setup.
//!
//! Tables, fixtures and mock endpoints are queued on the builder and created in that order
//! by [`TestBuilder::build`].

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    users: Vec<(String, String)>, // (username, role)
    farms: Vec<String>,
    function_endpoints: Vec<(String, usize, usize)>, // (name, status, expected_requests)
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            users: Vec::new(),
            farms: Vec::new(),
            function_endpoints: Vec::new(),
            mock_builders: Vec::new(),
        }
    }

    /// Add an entity table to the test database.
    ///
    /// ```no_run
    /// use allevapp_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), allevapp_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Farm)
    ///     .with_table(Equipment)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add every application table, parents before children.
    pub fn with_all_tables(self) -> Self {
        use entity::prelude::*;

        self.with_table(Farm)
            .with_table(Supplier)
            .with_table(AppUser)
            .with_table(Equipment)
            .with_table(Facility)
            .with_table(Project)
            .with_table(Quote)
            .with_table(OrderConfirmation)
            .with_table(Report)
            .with_table(Attachment)
            .with_table(DocumentCategory)
            .with_table(Document)
    }

    /// Insert an active user with [`TEST_PASSWORD`](crate::constant::TEST_PASSWORD).
    ///
    /// Requires the `app_user` table.
    pub fn with_user(mut self, username: &str, role: &str) -> Self {
        self.users.push((username.to_string(), role.to_string()));
        self
    }

    /// Insert a farm with the given name. Requires the `farm` table.
    pub fn with_farm(mut self, name: &str) -> Self {
        self.farms.push(name.to_string());
        self
    }

    /// Add a mock `POST /{name}` functions endpoint answering with `status`.
    pub fn with_function_endpoint(
        mut self,
        name: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.function_endpoints
            .push((name.to_string(), status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        test.with_tables(self.tables).await?;

        for name in self.farms {
            test.farm().insert_farm(&name).await?;
        }

        for (username, role) in self.users {
            test.user().insert_user(&username, &role).await?;
        }

        // Custom endpoints first so tests can queue an error response before a success
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut test.server));
        }

        for (name, status, expected) in self.function_endpoints {
            mocks.push(test.functions().create_endpoint(&name, status, expected));
        }

        test.mocks = mocks;

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_all_tables_with_fixtures() {
        let result = TestBuilder::new()
            .with_all_tables()
            .with_farm("North Farm")
            .with_user("admin", "admin")
            .build()
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn fails_inserting_fixture_without_table() {
        let result = TestBuilder::new().with_farm("North Farm").build().await;

        assert!(matches!(result, Err(TestError::DbErr(_))));
    }
}
