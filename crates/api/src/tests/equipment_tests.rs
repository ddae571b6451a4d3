// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_persistence, delivery_request, equipment_request, seed_employee_and_equipment,
};
use crate::{
    ApiError, EquipmentInfo, EquipmentRequest, STATUS_REMOVED, STATUS_SUCCESS, create_delivery,
    create_equipment, delete_equipment, list_equipment, update_equipment,
};

#[test]
fn test_create_equipment_echoes_fields() {
    let mut persistence = create_test_persistence();

    let response = create_equipment(&mut persistence, &equipment_request("Luva")).unwrap();

    assert_eq!(response.status, STATUS_SUCCESS);
    assert_eq!(response.name, "Luva");
    assert_eq!(response.description, "Protective gloves");
    assert_eq!(response.expiry, "2027-12-31");
}

#[test]
fn test_create_equipment_missing_description_is_invalid_input() {
    let mut persistence = create_test_persistence();
    let request = EquipmentRequest {
        description: String::new(),
        ..equipment_request("Luva")
    };

    let result = create_equipment(&mut persistence, &request);

    match result.unwrap_err() {
        ApiError::InvalidInput { field, message } => {
            assert_eq!(field, "descrição");
            assert!(message.contains("cannot be empty"));
        }
        other => panic!("Expected InvalidInput, got: {other:?}"),
    }
    assert!(list_equipment(&mut persistence).unwrap().is_empty());
}

#[test]
fn test_list_equipment_empty() {
    let mut persistence = create_test_persistence();

    assert!(list_equipment(&mut persistence).unwrap().is_empty());
}

#[test]
fn test_update_equipment_then_list_reflects_new_values() {
    let mut persistence = create_test_persistence();
    create_equipment(&mut persistence, &equipment_request("Luva")).unwrap();
    let equipment_id: i64 = list_equipment(&mut persistence).unwrap()[0].equipment_id;
    let request = EquipmentRequest {
        name: String::from("Capacete"),
        description: String::from("Hard hat"),
        expiry: String::from("2030-01-01"),
    };

    let response = update_equipment(&mut persistence, equipment_id, &request).unwrap();

    assert_eq!(response.status, STATUS_SUCCESS);
    assert_eq!(
        list_equipment(&mut persistence).unwrap(),
        vec![EquipmentInfo {
            equipment_id,
            name: String::from("Capacete"),
            description: String::from("Hard hat"),
            expiry: String::from("2030-01-01"),
        }]
    );
}

#[test]
fn test_update_unknown_equipment_is_not_found() {
    let mut persistence = create_test_persistence();

    let result = update_equipment(&mut persistence, 3, &equipment_request("Luva"));

    assert!(matches!(
        result.unwrap_err(),
        ApiError::ResourceNotFound { .. }
    ));
}

#[test]
fn test_delete_equipment_returns_snapshot_without_expiry() {
    let mut persistence = create_test_persistence();
    create_equipment(&mut persistence, &equipment_request("Luva")).unwrap();
    let equipment_id: i64 = list_equipment(&mut persistence).unwrap()[0].equipment_id;

    let response = delete_equipment(&mut persistence, equipment_id).unwrap();

    assert_eq!(response.status, STATUS_REMOVED);
    assert_eq!(response.name, "Luva");
    assert_eq!(response.description, "Protective gloves");
    assert!(list_equipment(&mut persistence).unwrap().is_empty());
}

#[test]
fn test_delete_referenced_equipment_is_reference_violation() {
    let mut persistence = create_test_persistence();
    let (employee_id, equipment_id) = seed_employee_and_equipment(&mut persistence);
    create_delivery(
        &mut persistence,
        &delivery_request(employee_id, equipment_id),
    )
    .unwrap();

    let result = delete_equipment(&mut persistence, equipment_id);

    match result.unwrap_err() {
        ApiError::ReferenceViolation { message } => {
            assert!(message.contains("still referenced"));
        }
        other => panic!("Expected ReferenceViolation, got: {other:?}"),
    }
    assert_eq!(list_equipment(&mut persistence).unwrap().len(), 1);
}
