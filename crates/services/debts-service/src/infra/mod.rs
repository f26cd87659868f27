//! Infrastructure: schema migrations for the debts database.

pub mod migrations;

pub use migrations::Migrator;
