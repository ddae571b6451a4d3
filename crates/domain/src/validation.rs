// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Cpf;

/// Maximum length of an employee or equipment name, in characters.
pub const MAX_NAME_LENGTH: usize = 40;
/// Maximum length of a CPF, in characters.
pub const MAX_CPF_LENGTH: usize = 40;
/// Maximum length of an equipment description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 255;
/// Maximum length of an equipment expiry, in characters.
pub const MAX_EXPIRY_LENGTH: usize = 40;
/// Maximum length of a delivery date, in characters.
pub const MAX_DELIVERY_DATE_LENGTH: usize = 40;

/// Checks a required free-text field.
///
/// The value is expected to be trimmed already.
fn check_required_text(value: &str, max_len: usize) -> Result<(), String> {
    if value.is_empty() {
        return Err(String::from("cannot be empty"));
    }

    let len: usize = value.chars().count();
    if len > max_len {
        return Err(format!("must be at most {max_len} characters, got {len}"));
    }

    Ok(())
}

/// Validates the fields of an employee.
///
/// This does NOT check CPF uniqueness; the store enforces that.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or longer than [`MAX_NAME_LENGTH`]
/// - The CPF is empty or longer than [`MAX_CPF_LENGTH`]
pub fn validate_employee_fields(name: &str, cpf: &Cpf) -> Result<(), DomainError> {
    check_required_text(name, MAX_NAME_LENGTH).map_err(DomainError::InvalidName)?;
    check_required_text(cpf.value(), MAX_CPF_LENGTH).map_err(DomainError::InvalidCpf)?;
    Ok(())
}

/// Validates the fields of an equipment item.
///
/// # Errors
///
/// Returns an error if any field is empty or exceeds its maximum length.
pub fn validate_equipment_fields(
    name: &str,
    description: &str,
    expiry: &str,
) -> Result<(), DomainError> {
    check_required_text(name, MAX_NAME_LENGTH).map_err(DomainError::InvalidName)?;
    check_required_text(description, MAX_DESCRIPTION_LENGTH)
        .map_err(DomainError::InvalidDescription)?;
    check_required_text(expiry, MAX_EXPIRY_LENGTH).map_err(DomainError::InvalidExpiry)?;
    Ok(())
}

/// Validates an approval code (CA).
///
/// # Errors
///
/// Returns an error if the code is negative.
pub const fn validate_approval_code(value: i32) -> Result<(), DomainError> {
    if value < 0 {
        return Err(DomainError::InvalidApprovalCode { value });
    }
    Ok(())
}

/// Validates a validity period.
///
/// # Errors
///
/// Returns an error if the period is negative.
pub const fn validate_period(value: i32) -> Result<(), DomainError> {
    if value < 0 {
        return Err(DomainError::InvalidPeriod { value });
    }
    Ok(())
}

/// Validates the scalar fields of a delivery.
///
/// Employee and equipment references are not checked here: the store
/// rejects references to rows that do not exist.
///
/// # Errors
///
/// Returns an error if:
/// - The delivery date is empty or longer than [`MAX_DELIVERY_DATE_LENGTH`]
/// - The approval code is negative
/// - The period is negative
pub fn validate_delivery_fields(
    delivery_date: &str,
    approval_code: i32,
    period: i32,
) -> Result<(), DomainError> {
    check_required_text(delivery_date, MAX_DELIVERY_DATE_LENGTH)
        .map_err(DomainError::InvalidDeliveryDate)?;
    validate_approval_code(approval_code)?;
    validate_period(period)?;
    Ok(())
}
