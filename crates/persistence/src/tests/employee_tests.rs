// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for employee persistence operations.

use safeguard_domain::{Employee, NewEmployee};

use super::{
    create_test_delivery_input, create_test_employee, create_test_equipment,
    create_test_persistence,
};
use crate::{Persistence, PersistenceError};

#[test]
fn test_create_employee_assigns_id() {
    let mut persistence: Persistence = create_test_persistence();

    let employee: Employee = create_test_employee(&mut persistence, "Ana", "111");

    assert!(employee.employee_id > 0);
    assert_eq!(employee.name, "Ana");
    assert_eq!(employee.cpf.value(), "111");
}

#[test]
fn test_create_employee_with_duplicate_cpf_fails() {
    let mut persistence: Persistence = create_test_persistence();
    create_test_employee(&mut persistence, "Ana", "111");

    let duplicate: NewEmployee = NewEmployee::new("Bruno", "111").unwrap();
    let result: Result<Employee, PersistenceError> = persistence.create_employee(&duplicate);

    assert!(
        matches!(result, Err(PersistenceError::UniqueViolation(_))),
        "Expected UniqueViolation, got: {result:?}"
    );

    // No second row was created
    let employees: Vec<Employee> = persistence.list_employees().unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].name, "Ana");
}

#[test]
fn test_list_employees_empty() {
    let mut persistence: Persistence = create_test_persistence();
    assert!(persistence.list_employees().unwrap().is_empty());
}

#[test]
fn test_list_employees_ordered_by_id() {
    let mut persistence: Persistence = create_test_persistence();
    let first: Employee = create_test_employee(&mut persistence, "Ana", "111");
    let second: Employee = create_test_employee(&mut persistence, "Bruno", "222");

    let employees: Vec<Employee> = persistence.list_employees().unwrap();

    assert_eq!(employees, vec![first, second]);
}

#[test]
fn test_get_employee_by_id() {
    let mut persistence: Persistence = create_test_persistence();
    let created: Employee = create_test_employee(&mut persistence, "Ana", "111");

    let found: Option<Employee> = persistence.get_employee_by_id(created.employee_id).unwrap();
    assert_eq!(found, Some(created));

    let missing: Option<Employee> = persistence.get_employee_by_id(9999).unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_update_employee_round_trip() {
    let mut persistence: Persistence = create_test_persistence();
    let created: Employee = create_test_employee(&mut persistence, "Ana", "111");

    let changes: NewEmployee = NewEmployee::new("Ana Maria", "333").unwrap();
    let updated: Employee = persistence
        .update_employee(created.employee_id, &changes)
        .unwrap();

    assert_eq!(updated.employee_id, created.employee_id);
    assert_eq!(updated.name, "Ana Maria");
    assert_eq!(updated.cpf.value(), "333");

    let employees: Vec<Employee> = persistence.list_employees().unwrap();
    assert_eq!(employees, vec![updated]);
}

#[test]
fn test_update_employee_keeping_own_cpf_succeeds() {
    let mut persistence: Persistence = create_test_persistence();
    let created: Employee = create_test_employee(&mut persistence, "Ana", "111");

    let changes: NewEmployee = NewEmployee::new("Ana Souza", "111").unwrap();
    let result: Result<Employee, PersistenceError> =
        persistence.update_employee(created.employee_id, &changes);

    assert!(result.is_ok());
}

#[test]
fn test_update_employee_to_existing_cpf_fails() {
    let mut persistence: Persistence = create_test_persistence();
    create_test_employee(&mut persistence, "Ana", "111");
    let bruno: Employee = create_test_employee(&mut persistence, "Bruno", "222");

    let changes: NewEmployee = NewEmployee::new("Bruno", "111").unwrap();
    let result: Result<Employee, PersistenceError> =
        persistence.update_employee(bruno.employee_id, &changes);

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));

    // Bruno keeps the original CPF
    let stored: Employee = persistence
        .get_employee_by_id(bruno.employee_id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.cpf.value(), "222");
}

#[test]
fn test_update_missing_employee_returns_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let changes: NewEmployee = NewEmployee::new("Ghost", "000").unwrap();
    let result: Result<Employee, PersistenceError> = persistence.update_employee(42, &changes);

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
    assert!(persistence.list_employees().unwrap().is_empty());
}

#[test]
fn test_delete_employee_returns_snapshot() {
    let mut persistence: Persistence = create_test_persistence();
    let created: Employee = create_test_employee(&mut persistence, "Ana", "111");

    let removed: Employee = persistence.delete_employee(created.employee_id).unwrap();

    assert_eq!(removed, created);
    assert!(persistence.list_employees().unwrap().is_empty());
}

#[test]
fn test_delete_missing_employee_returns_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result: Result<Employee, PersistenceError> = persistence.delete_employee(7);

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
    assert!(persistence.list_employees().unwrap().is_empty());
}

#[test]
fn test_delete_employee_referenced_by_delivery_fails() {
    let mut persistence: Persistence = create_test_persistence();
    let employee: Employee = create_test_employee(&mut persistence, "Ana", "111");
    let helmet = create_test_equipment(&mut persistence, "Helmet");
    persistence
        .create_delivery(&create_test_delivery_input(
            employee.employee_id,
            helmet.equipment_id,
        ))
        .unwrap();

    let result: Result<Employee, PersistenceError> =
        persistence.delete_employee(employee.employee_id);

    assert!(
        matches!(result, Err(PersistenceError::ForeignKeyViolation(_))),
        "Expected ForeignKeyViolation, got: {result:?}"
    );
    assert!(
        persistence
            .get_employee_by_id(employee.employee_id)
            .unwrap()
            .is_some()
    );
}
