//! Service layer - business logic.

mod debt_service;

pub use debt_service::{CreateDebtInput, CreateDebtOutput, DebtManager, DebtOutput, DebtService};
