// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the SafeGuard EPI tracker.
//!
//! Request bodies arrive as typed DTOs, are validated into domain inputs,
//! and are handed to the persistence layer. Responses are DTOs whose
//! serialized field names form the public wire contract.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    create_delivery, create_employee, create_equipment, delete_delivery, delete_employee,
    delete_equipment, list_deliveries, list_employees, list_equipment, update_delivery,
    update_employee, update_equipment,
};
pub use request_response::{
    DeliveryInfo, DeliveryRequest, DeliveryResponse, EmployeeInfo, EmployeeRequest,
    EmployeeResponse, EquipmentInfo, EquipmentRequest, EquipmentResponse,
    RemovedEquipmentResponse, STATUS_REMOVED, STATUS_SUCCESS,
};
