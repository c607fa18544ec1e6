//! The module contains the errors the engine can return.
//!
//! - [`InvalidInput`] a command failed validation; nothing was read or written.
//! - [`KeyNotFound`] a referenced record (food, order, table, menu, invoice, user) is missing.
//! - [`ExistingKey`] a uniqueness rule was violated.
//! - [`Pipeline`] the store failed while computing a billing view.
//! - [`EmptyBilling`] an invoice points at an order without line items.
//! - [`Timeout`] the operation exceeded the request budget.
//!
//!  [`InvalidInput`]: EngineError::InvalidInput
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`ExistingKey`]: EngineError::ExistingKey
//!  [`Pipeline`]: EngineError::Pipeline
//!  [`EmptyBilling`]: EngineError::EmptyBilling
//!  [`Timeout`]: EngineError::Timeout
use std::time::Duration;

use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("login or password is incorrect")]
    InvalidCredentials,
    #[error("Billing pipeline failed: {0}")]
    Pipeline(String),
    #[error("Order \"{0}\" has no billable items")]
    EmptyBilling(String),
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
    #[error("Password hashing failed: {0}")]
    Hashing(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InvalidCredentials, Self::InvalidCredentials) => true,
            (Self::Pipeline(a), Self::Pipeline(b)) => a == b,
            (Self::EmptyBilling(a), Self::EmptyBilling(b)) => a == b,
            (Self::Timeout(a), Self::Timeout(b)) => a == b,
            (Self::Hashing(a), Self::Hashing(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
