//! Database migrations.

use sea_orm_migration::prelude::*;

mod m20240301_000001_create_debts_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240301_000001_create_debts_table::Migration)]
    }

    /// Bookkeeping table of this service; services may share one database.
    fn migration_table_name() -> DynIden {
        Alias::new("debts_seaql_migrations").into_iden()
    }
}
