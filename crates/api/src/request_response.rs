// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names on the wire are Portuguese and, for historical clients,
//! not always consistent between endpoints. The serde attributes below are
//! the contract; the Rust field names are what the rest of the workspace
//! uses.

use safeguard_domain::{Delivery, Employee, Equipment};

/// Status value carried by every successful create or update response.
pub const STATUS_SUCCESS: &str = "success";

/// Status value carried by every successful delete response.
pub const STATUS_REMOVED: &str = "removido";

/// API request to create or update an employee.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmployeeRequest {
    /// The employee's name. Update forms send it as `nome_`.
    #[serde(rename = "nome", alias = "nome_")]
    pub name: String,
    /// The employee's CPF.
    pub cpf: String,
}

/// API response for a created, updated, or removed employee.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmployeeResponse {
    /// `success` or `removido`.
    pub status: String,
    /// The employee's name.
    #[serde(rename = "nome")]
    pub name: String,
    /// The employee's CPF.
    pub cpf: String,
}

impl EmployeeResponse {
    /// Builds a response from a stored employee and a status value.
    #[must_use]
    pub fn from_employee(status: &str, employee: &Employee) -> Self {
        Self {
            status: status.to_string(),
            name: employee.name.clone(),
            cpf: employee.cpf.value().to_string(),
        }
    }
}

/// One row of the employee listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmployeeInfo {
    /// The employee's identifier.
    #[serde(rename = "id_funcionario")]
    pub employee_id: i64,
    /// The employee's name.
    #[serde(rename = "nome")]
    pub name: String,
    /// The employee's CPF.
    pub cpf: String,
}

impl From<Employee> for EmployeeInfo {
    fn from(employee: Employee) -> Self {
        Self {
            employee_id: employee.employee_id,
            name: employee.name,
            cpf: employee.cpf.value().to_string(),
        }
    }
}

/// API request to create or update an equipment item.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EquipmentRequest {
    /// The item's name.
    #[serde(rename = "nome")]
    pub name: String,
    /// The item's description. Update forms send it without diacritics.
    #[serde(rename = "descrição", alias = "descricao")]
    pub description: String,
    /// The item's expiry.
    #[serde(rename = "validade")]
    pub expiry: String,
}

/// API response for a created or updated equipment item.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EquipmentResponse {
    /// Always `success`.
    pub status: String,
    /// The item's name.
    #[serde(rename = "nome")]
    pub name: String,
    /// The item's description.
    #[serde(rename = "descrição")]
    pub description: String,
    /// The item's expiry.
    #[serde(rename = "validade")]
    pub expiry: String,
}

impl EquipmentResponse {
    /// Builds a success response from a stored item.
    #[must_use]
    pub fn success(item: &Equipment) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            expiry: item.expiry.clone(),
        }
    }
}

/// API response for a removed equipment item.
///
/// Unlike [`EquipmentResponse`] this does not echo the expiry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RemovedEquipmentResponse {
    /// Always `removido`.
    pub status: String,
    /// The item's name.
    #[serde(rename = "nome")]
    pub name: String,
    /// The item's description.
    #[serde(rename = "descrição")]
    pub description: String,
}

impl From<Equipment> for RemovedEquipmentResponse {
    fn from(item: Equipment) -> Self {
        Self {
            status: STATUS_REMOVED.to_string(),
            name: item.name,
            description: item.description,
        }
    }
}

/// One row of the equipment listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EquipmentInfo {
    /// The item's identifier.
    #[serde(rename = "id_epi")]
    pub equipment_id: i64,
    /// The item's name.
    #[serde(rename = "nome")]
    pub name: String,
    /// The item's description.
    #[serde(rename = "descricao")]
    pub description: String,
    /// The item's expiry.
    #[serde(rename = "validade")]
    pub expiry: String,
}

impl From<Equipment> for EquipmentInfo {
    fn from(item: Equipment) -> Self {
        Self {
            equipment_id: item.equipment_id,
            name: item.name,
            description: item.description,
            expiry: item.expiry,
        }
    }
}

/// API request to create or update a delivery.
///
/// Create forms use underscores in the field names, update forms use
/// spaces. Both spellings are accepted on both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeliveryRequest {
    /// The delivery date.
    #[serde(rename = "data_de_entrega", alias = "data de entrega")]
    pub delivery_date: String,
    /// The approval code (CA).
    #[serde(rename = "ca")]
    pub approval_code: i32,
    /// The validity period.
    #[serde(rename = "periodo")]
    pub period: i32,
    /// The receiving employee.
    #[serde(rename = "funcionario_id", alias = "funcionario id")]
    pub employee_id: i64,
    /// The delivered equipment item.
    #[serde(rename = "epi_id", alias = "epi id")]
    pub equipment_id: i64,
}

/// API response for a created, updated, or removed delivery.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeliveryResponse {
    /// `success` or `removido`.
    pub status: String,
    /// The delivery date.
    #[serde(rename = "data de entrega")]
    pub delivery_date: String,
    /// The approval code (CA).
    #[serde(rename = "ca")]
    pub approval_code: i32,
    /// The validity period.
    #[serde(rename = "periodo")]
    pub period: i32,
    /// The receiving employee.
    #[serde(rename = "funcionario id")]
    pub employee_id: i64,
    /// The delivered equipment item.
    #[serde(rename = "epi id")]
    pub equipment_id: i64,
}

impl DeliveryResponse {
    /// Builds a response from a stored delivery and a status value.
    #[must_use]
    pub fn from_delivery(status: &str, delivery: &Delivery) -> Self {
        Self {
            status: status.to_string(),
            delivery_date: delivery.delivery_date.clone(),
            approval_code: delivery.approval_code,
            period: delivery.period,
            employee_id: delivery.employee_id,
            equipment_id: delivery.equipment_id,
        }
    }
}

/// One row of the delivery listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeliveryInfo {
    /// The delivery's identifier.
    #[serde(rename = "id_entrega")]
    pub delivery_id: i64,
    /// The delivery date.
    #[serde(rename = "data_entrega")]
    pub delivery_date: String,
    /// The approval code (CA).
    #[serde(rename = "ca")]
    pub approval_code: i32,
    /// The validity period.
    #[serde(rename = "periodo")]
    pub period: i32,
    /// The delivered equipment item.
    #[serde(rename = "epi_id")]
    pub equipment_id: i64,
    /// The receiving employee.
    #[serde(rename = "funcionario_id")]
    pub employee_id: i64,
}

impl From<Delivery> for DeliveryInfo {
    fn from(delivery: Delivery) -> Self {
        Self {
            delivery_id: delivery.delivery_id,
            delivery_date: delivery.delivery_date,
            approval_code: delivery.approval_code,
            period: delivery.period,
            equipment_id: delivery.equipment_id,
            employee_id: delivery.employee_id,
        }
    }
}
