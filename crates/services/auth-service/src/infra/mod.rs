//! Infrastructure: schema migrations for the auth database.

pub mod migrations;

pub use migrations::Migrator;
