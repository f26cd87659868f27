//! Request payload rules for the debt endpoints.

use crate::service::CreateDebtInput;
use common::Validate;
use domain::{cpf, DomainError};

impl Validate for CreateDebtInput {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !cpf::validate(&self.document) {
            errors.push(DomainError::InvalidDocument.to_string());
        }
        if self.amount.is_nan() || self.amount <= 0.0 {
            errors.push(DomainError::InvalidAmount.to_string());
        }

        errors
    }
}
