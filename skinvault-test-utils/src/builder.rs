//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_account_tables: bool,
    include_catalog_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    bundles: Vec<(String, Vec<(String, Option<i32>)>)>, // (bundle name, [(skin name, vp)])
    skins: Vec<(String, Option<i32>)>,                 // standalone (skin name, vp)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_account_tables: false,
            include_catalog_tables: false,
            users: Vec::new(),
            bundles: Vec::new(),
            skins: Vec::new(),
        }
    }

    /// Add the per-account tables to the test database.
    ///
    /// Creates AccountUser, AccountProfile, AccountWallet, InventoryItem and MatchRecord.
    pub fn with_account_tables(mut self) -> Self {
        self.include_account_tables = true;
        self
    }

    /// Add the store catalog tables to the test database.
    ///
    /// Creates CatalogBundle and CatalogSkin.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use skinvault_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), skinvault_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(CatalogBundle)
    ///     .with_table(CatalogSkin)
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

    /// Insert a mock user with profile and wallet into the database.
    ///
    /// Queues a fixture user created through [`UserFixtures::insert_user`](crate::fixtures::user::UserFixtures::insert_user).
    /// Requires `with_account_tables`.
    pub fn with_mock_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Insert a mock bundle and its skins into the catalog.
    ///
    /// Requires `with_catalog_tables`.
    pub fn with_mock_bundle(
        mut self,
        name: impl Into<String>,
        skins: Vec<(&str, Option<i32>)>,
    ) -> Self {
        let skins = skins
            .into_iter()
            .map(|(skin, value_vp)| (skin.to_string(), value_vp))
            .collect();
        self.bundles.push((name.into(), skins));
        self
    }

    /// Insert a mock standalone skin into the catalog.
    ///
    /// Requires `with_catalog_tables`.
    pub fn with_mock_skin(mut self, name: impl Into<String>, value_vp: Option<i32>) -> Self {
        self.skins.push((name.into(), value_vp));
        self
    }

    /// Build the test context.
    ///
    /// Creates the tables first, then inserts the queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_account_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AccountUser),
                schema.create_table_from_entity(entity::prelude::AccountProfile),
                schema.create_table_from_entity(entity::prelude::AccountWallet),
                schema.create_table_from_entity(entity::prelude::InventoryItem),
                schema.create_table_from_entity(entity::prelude::MatchRecord),
            ]);
        }

        if self.include_catalog_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::CatalogBundle),
                schema.create_table_from_entity(entity::prelude::CatalogSkin),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for username in self.users {
            setup.user().insert_user(&username).await?;
        }

        for (name, skins) in self.bundles {
            let skins: Vec<(&str, Option<i32>)> = skins
                .iter()
                .map(|(skin, value_vp)| (skin.as_str(), *value_vp))
                .collect();
            setup.catalog().insert_bundle(&name, skins).await?;
        }

        for (name, value_vp) in self.skins {
            setup.catalog().insert_skin(&name, value_vp, None).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
