// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Cpf, DomainError, MAX_CPF_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
    validate_approval_code, validate_delivery_fields, validate_employee_fields,
    validate_equipment_fields, validate_period,
};

#[test]
fn test_validate_employee_fields_accepts_valid_employee() {
    let result: Result<(), DomainError> = validate_employee_fields("Ana", &Cpf::new("111"));
    assert!(result.is_ok());
}

#[test]
fn test_validate_employee_fields_rejects_empty_name() {
    let result: Result<(), DomainError> = validate_employee_fields("", &Cpf::new("111"));
    assert!(matches!(result, Err(DomainError::InvalidName(_))));
}

#[test]
fn test_validate_employee_fields_accepts_name_at_limit() {
    let name: String = "a".repeat(MAX_NAME_LENGTH);
    let result: Result<(), DomainError> = validate_employee_fields(&name, &Cpf::new("111"));
    assert!(result.is_ok());
}

#[test]
fn test_validate_employee_fields_rejects_name_over_limit() {
    let name: String = "a".repeat(MAX_NAME_LENGTH + 1);
    let result: Result<(), DomainError> = validate_employee_fields(&name, &Cpf::new("111"));
    assert_eq!(
        result,
        Err(DomainError::InvalidName(String::from(
            "must be at most 40 characters, got 41"
        )))
    );
}

#[test]
fn test_validate_employee_fields_counts_characters_not_bytes() {
    // 40 two-byte characters.
    let name: String = "ç".repeat(MAX_NAME_LENGTH);
    let result: Result<(), DomainError> = validate_employee_fields(&name, &Cpf::new("111"));
    assert!(result.is_ok());
}

#[test]
fn test_validate_employee_fields_rejects_cpf_over_limit() {
    let cpf: Cpf = Cpf::new(&"9".repeat(MAX_CPF_LENGTH + 1));
    let result: Result<(), DomainError> = validate_employee_fields("Ana", &cpf);
    assert!(matches!(result, Err(DomainError::InvalidCpf(_))));
}

#[test]
fn test_validate_equipment_fields_rejects_empty_description() {
    let result: Result<(), DomainError> = validate_equipment_fields("Helmet", "", "2027");
    assert!(matches!(result, Err(DomainError::InvalidDescription(_))));
}

#[test]
fn test_validate_equipment_fields_accepts_long_description() {
    let description: String = "d".repeat(MAX_DESCRIPTION_LENGTH);
    let result: Result<(), DomainError> =
        validate_equipment_fields("Helmet", &description, "2027");
    assert!(result.is_ok());
}

#[test]
fn test_validate_approval_code_accepts_zero() {
    assert!(validate_approval_code(0).is_ok());
}

#[test]
fn test_validate_approval_code_rejects_negative() {
    assert_eq!(
        validate_approval_code(-5),
        Err(DomainError::InvalidApprovalCode { value: -5 })
    );
}

#[test]
fn test_validate_period_rejects_negative() {
    assert_eq!(
        validate_period(-1),
        Err(DomainError::InvalidPeriod { value: -1 })
    );
}

#[test]
fn test_validate_delivery_fields_checks_date_first() {
    let result: Result<(), DomainError> = validate_delivery_fields("", -1, -1);
    assert!(matches!(result, Err(DomainError::InvalidDeliveryDate(_))));
}
