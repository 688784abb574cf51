//! Declarative test builder.
//!
//! The builder queues tables and fixtures, all of which are created during the final `build()`
//! call so a test can describe its starting state in one expression.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::cookbook_tables, TestSetup};

/// A recipe fixture queued by [`TestBuilder::with_recipe`]
struct RecipeFixture {
    owner: String,
    name: String,
    // (ingredient, amount, unit)
    ingredients: Vec<(String, i32, String)>,
}

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_cookbook_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    ingredients: Vec<String>,
    recipes: Vec<RecipeFixture>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_cookbook_tables: false,
            users: Vec::new(),
            ingredients: Vec::new(),
            recipes: Vec::new(),
        }
    }

    /// Add every cookbook table to the test database.
    ///
    /// Required by all fixture methods.
    pub fn with_cookbook_tables(mut self) -> Self {
        self.include_cookbook_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cookbook_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), cookbook_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(CookbookUser)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with generated email, address and password.
    pub fn with_user(mut self, name: impl Into<String>) -> Self {
        self.users.push(name.into());
        self
    }

    /// Insert an ingredient.
    pub fn with_ingredient(mut self, name: impl Into<String>) -> Self {
        self.ingredients.push(name.into());
        self
    }

    /// Insert a recipe owned by `owner`.
    ///
    /// The owner must be added with [`TestBuilder::with_user`]. Ingredients and units named by
    /// `ingredients` are created when they do not exist yet.
    ///
    /// # Arguments
    /// - `owner` - Name of the owning user
    /// - `name` - Name of the recipe
    /// - `ingredients` - `(ingredient, amount, unit)` lines of the recipe
    pub fn with_recipe(
        mut self,
        owner: impl Into<String>,
        name: impl Into<String>,
        ingredients: &[(&str, i32, &str)],
    ) -> Self {
        self.recipes.push(RecipeFixture {
            owner: owner.into(),
            name: name.into(),
            ingredients: ingredients
                .iter()
                .map(|(ingredient, amount, unit)| {
                    (ingredient.to_string(), *amount, unit.to_string())
                })
                .collect(),
        });
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_cookbook_tables {
            all_tables.extend(cookbook_tables());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for name in self.users {
            setup.cookbook().insert_user(&name).await?;
        }

        for name in self.ingredients {
            setup.cookbook().insert_ingredient(&name).await?;
        }

        for recipe in self.recipes {
            setup
                .cookbook()
                .insert_recipe_by_owner_name(&recipe.owner, &recipe.name, &recipe.ingredients)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
