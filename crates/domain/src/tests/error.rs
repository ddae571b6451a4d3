// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidName(String::from("cannot be empty"));
    assert_eq!(format!("{err}"), "Invalid name: cannot be empty");

    let err: DomainError = DomainError::InvalidCpf(String::from("cannot be empty"));
    assert_eq!(format!("{err}"), "Invalid CPF: cannot be empty");

    let err: DomainError = DomainError::InvalidDescription(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid description: test");

    let err: DomainError = DomainError::InvalidExpiry(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid expiry: test");

    let err: DomainError = DomainError::InvalidDeliveryDate(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid delivery date: test");

    let err: DomainError = DomainError::InvalidApprovalCode { value: -1 };
    assert_eq!(
        format!("{err}"),
        "Invalid approval code -1: must not be negative"
    );

    let err: DomainError = DomainError::InvalidPeriod { value: -30 };
    assert_eq!(format!("{err}"), "Invalid period -30: must not be negative");
}
