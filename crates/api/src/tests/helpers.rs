// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use safeguard_persistence::Persistence;

use crate::{
    DeliveryRequest, EmployeeRequest, EquipmentRequest, create_employee, create_equipment,
    list_employees, list_equipment,
};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn employee_request(name: &str, cpf: &str) -> EmployeeRequest {
    EmployeeRequest {
        name: name.to_string(),
        cpf: cpf.to_string(),
    }
}

pub fn equipment_request(name: &str) -> EquipmentRequest {
    EquipmentRequest {
        name: name.to_string(),
        description: String::from("Protective gloves"),
        expiry: String::from("2027-12-31"),
    }
}

pub fn delivery_request(employee_id: i64, equipment_id: i64) -> DeliveryRequest {
    DeliveryRequest {
        delivery_date: String::from("2026-03-01"),
        approval_code: 12345,
        period: 180,
        employee_id,
        equipment_id,
    }
}

/// Creates one employee and one equipment item and returns their ids.
pub fn seed_employee_and_equipment(persistence: &mut Persistence) -> (i64, i64) {
    create_employee(persistence, &employee_request("Ana", "111")).unwrap();
    create_equipment(persistence, &equipment_request("Luva")).unwrap();

    let employee_id: i64 = list_employees(persistence).unwrap()[0].employee_id;
    let equipment_id: i64 = list_equipment(persistence).unwrap()[0].equipment_id;
    (employee_id, equipment_id)
}
