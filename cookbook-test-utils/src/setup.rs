//! In-memory database setup shared by repository, service and controller tests.

use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    Schema,
};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
}

impl TestSetup {
    /// Convert the test state into any type that can be constructed from a database connection.
    ///
    /// This allows conversion to the server's `AppState` without a circular dependency between
    /// the test-utils crate and the main cookbook crate.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.app_state();
    /// ```
    pub fn app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.state.db.clone())
    }
}

impl TestSetup {
    /// Connects to a fresh in-memory SQLite database without any tables
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// CREATE TABLE statements for every cookbook table, parents before children
pub fn cookbook_tables() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::CookbookUser),
        schema.create_table_from_entity(entity::prelude::Recipe),
        schema.create_table_from_entity(entity::prelude::Ingredient),
        schema.create_table_from_entity(entity::prelude::Unit),
        schema.create_table_from_entity(entity::prelude::RecipeIngredient),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_cookbook_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;
            setup
                .with_tables($crate::setup::cookbook_tables())
                .await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
