// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Employee or equipment name is empty or too long.
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// CPF is empty or too long.
    #[error("Invalid CPF: {0}")]
    InvalidCpf(String),

    /// Equipment description is empty or too long.
    #[error("Invalid description: {0}")]
    InvalidDescription(String),

    /// Equipment expiry is empty or too long.
    #[error("Invalid expiry: {0}")]
    InvalidExpiry(String),

    /// Delivery date is empty or too long.
    #[error("Invalid delivery date: {0}")]
    InvalidDeliveryDate(String),

    /// Approval code (CA) is negative.
    #[error("Invalid approval code {value}: must not be negative")]
    InvalidApprovalCode {
        /// The rejected value.
        value: i32,
    },

    /// Validity period is negative.
    #[error("Invalid period {value}: must not be negative")]
    InvalidPeriod {
        /// The rejected value.
        value: i32,
    },
}
