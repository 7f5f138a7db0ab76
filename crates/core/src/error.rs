//! # Error Module
//!
//! Domain errors for the account core, using thiserror.
//!
//! Construction errors are fatal to the entity being built; transaction
//! validation errors leave the account balance untouched. Notification
//! failures never propagate out of a balance mutation - the subject
//! isolates them per observer.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    // === Construction errors ===
    #[error("Account number must be a positive integer: {0}")]
    InvalidAccountNumber(u32),

    #[error("Client number must be a positive integer: {0}")]
    InvalidClientNumber(u32),

    #[error("{0} cannot be blank.")]
    BlankName(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    // === Transaction validation errors ===
    #[error("Amount must be numeric: {0}")]
    AmountNotNumeric(String),

    #[error("Deposit amount: ${0:.2} must be positive.")]
    DepositNotPositive(Decimal),

    #[error("Withdrawal amount: ${0:.2} must be positive.")]
    WithdrawalNotPositive(Decimal),

    #[error("Withdrawal amount: ${amount:.2} must not exceed the account balance: ${balance:.2}")]
    InsufficientFunds { amount: Decimal, balance: Decimal },

    // === Notification errors ===
    #[error("Notification delivery failed: {0}")]
    NotificationFailed(String),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// True for errors raised while constructing an account or client.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidAccountNumber(_)
                | CoreError::InvalidClientNumber(_)
                | CoreError::BlankName(_)
                | CoreError::InvalidEmail(_)
        )
    }

    /// True for errors raised by deposit/withdraw validation.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            CoreError::AmountNotNumeric(_)
                | CoreError::DepositNotPositive(_)
                | CoreError::WithdrawalNotPositive(_)
                | CoreError::InsufficientFunds { .. }
        )
    }
}
