// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod employee_tests;

use safeguard_domain::{Employee, Equipment, NewDelivery, NewEmployee, NewEquipment};

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

pub fn create_test_employee(persistence: &mut Persistence, name: &str, cpf: &str) -> Employee {
    let employee: NewEmployee = NewEmployee::new(name, cpf).unwrap();
    persistence.create_employee(&employee).unwrap()
}

pub fn create_test_equipment(persistence: &mut Persistence, name: &str) -> Equipment {
    let item: NewEquipment = NewEquipment::new(name, "Test equipment", "2027-12-31").unwrap();
    persistence.create_equipment(&item).unwrap()
}

pub fn create_test_delivery_input(employee_id: i64, equipment_id: i64) -> NewDelivery {
    NewDelivery::new("2026-03-01", 12345, 180, employee_id, equipment_id).unwrap()
}
