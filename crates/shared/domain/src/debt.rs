//! Customer debt entity.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::cpf;
use crate::error::{DomainError, DomainResult};

/// A debt owed by the holder of `document`.
#[derive(Debug, Clone, PartialEq)]
pub struct Debt {
    id: Uuid,
    document: String,
    amount: f64,
    due_date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl Debt {
    /// Validate and create a debt. Rejects invalid documents and non-positive amounts.
    pub fn new(
        id: Uuid,
        document: impl Into<String>,
        amount: f64,
        due_date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let document = document.into();
        if !cpf::validate(&document) {
            return Err(DomainError::InvalidDocument);
        }
        if amount.is_nan() || amount <= 0.0 {
            return Err(DomainError::InvalidAmount);
        }

        Ok(Self {
            id,
            document,
            amount,
            due_date,
            created_at,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    #[test]
    fn test_new_debt() {
        let id = Uuid::new_v4();
        let debt = Debt::new(id, "17185070031", 150.5, due(), Utc::now()).unwrap();

        assert_eq!(debt.id(), id);
        assert_eq!(debt.document(), "17185070031");
        assert_eq!(debt.amount(), 150.5);
        assert_eq!(debt.due_date(), due());
    }

    #[test]
    fn test_invalid_document() {
        let result = Debt::new(Uuid::new_v4(), "12345678900", 10.0, due(), Utc::now());
        assert_eq!(result.unwrap_err(), DomainError::InvalidDocument);
    }

    #[test]
    fn test_non_positive_amount() {
        for amount in [0.0, -1.0, f64::NAN] {
            let result = Debt::new(Uuid::new_v4(), "17185070031", amount, due(), Utc::now());
            assert_eq!(result.unwrap_err(), DomainError::InvalidAmount);
        }
    }
}
