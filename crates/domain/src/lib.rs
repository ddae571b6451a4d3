// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types for the SafeGuard EPI tracker.
//!
//! Three record types are tracked: employees, equipment items (EPI), and
//! deliveries linking one employee to one equipment item. Each record type
//! has a matching `New*` input type that can only be built from field values
//! that pass validation.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use types::{Cpf, Delivery, Employee, Equipment, NewDelivery, NewEmployee, NewEquipment};
pub use validation::{
    MAX_CPF_LENGTH, MAX_DELIVERY_DATE_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_EXPIRY_LENGTH,
    MAX_NAME_LENGTH, validate_approval_code, validate_delivery_fields, validate_employee_fields,
    validate_equipment_fields, validate_period,
};
