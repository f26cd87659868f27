//! SeaORM entities.

pub mod debt;
