//! Request payload rules for the user endpoints.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::service::{CreateUserInput, LoginInput};
use common::Validate;
use domain::{cpf, MIN_NAME_LENGTH};

static LETTERS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z ]*$").expect("valid regex"));
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});
static LOWER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("valid regex"));
static UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid regex"));
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("valid regex"));
// Unanchored: satisfied by any run of 6 to 12 alphanumerics
static ALNUM_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z0-9]{6,12}").expect("valid regex"));

impl Validate for CreateUserInput {
    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !cpf::validate(&self.document) {
            errors.push("invalid cpf".to_string());
        }
        if self.name.trim_matches(' ').chars().count() < MIN_NAME_LENGTH {
            errors.push("name must be at least 3 characters".to_string());
        }
        if !LETTERS_ONLY.is_match(&self.name) {
            errors.push("name must contains only letters".to_string());
        }
        if !EMAIL.is_match(&self.email) {
            errors.push("invalid email address".to_string());
        }
        errors.extend(password_errors(&self.password));

        errors
    }
}

fn password_errors(password: &str) -> Vec<String> {
    let rules: [(&Lazy<Regex>, &str); 4] = [
        (&LOWER, "password must contains at least one lower case character"),
        (&UPPER, "password must contains at least one upper case character"),
        (&DIGIT, "password must contains at least one numeric character"),
        (&ALNUM_RUN, "password must contains at least 6 or up to 12 characters"),
    ];

    rules
        .iter()
        .filter(|(rule, _)| !rule.is_match(password))
        .map(|(_, message)| message.to_string())
        .collect()
}

/// Login has no shape rules; unknown documents fail at lookup.
impl Validate for LoginInput {
    fn validate(&self) -> Vec<String> {
        Vec::new()
    }
}
