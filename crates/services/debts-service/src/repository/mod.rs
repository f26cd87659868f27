//! Repository layer for data access.

pub mod entities;
mod debt_repository;

pub use debt_repository::{DebtRepository, DebtStore};

#[cfg(any(test, feature = "test-utils"))]
pub use debt_repository::MockDebtRepository;
