// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{
    validate_delivery_fields, validate_employee_fields, validate_equipment_fields,
};
use serde::{Deserialize, Serialize};

/// An employee's CPF, the national identifier used as the employee's unique key.
///
/// Surrounding whitespace is stripped on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cpf {
    value: String,
}

impl Cpf {
    /// Creates a new CPF.
    ///
    /// # Arguments
    ///
    /// * `value` - The CPF text
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the CPF text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A persisted employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The identifier assigned by the database.
    pub employee_id: i64,
    /// The employee's name.
    pub name: String,
    /// The employee's CPF, unique across all employees.
    pub cpf: Cpf,
}

impl Employee {
    /// Creates an employee from stored values.
    #[must_use]
    pub const fn new(employee_id: i64, name: String, cpf: Cpf) -> Self {
        Self {
            employee_id,
            name,
            cpf,
        }
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Employee: {} {}>", self.name, self.cpf)
    }
}

/// Validated field values for creating or updating an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    name: String,
    cpf: Cpf,
}

impl NewEmployee {
    /// Builds validated employee fields.
    ///
    /// # Arguments
    ///
    /// * `name` - The employee's name
    /// * `cpf` - The employee's CPF
    ///
    /// # Errors
    ///
    /// Returns an error if either field is empty or too long.
    pub fn new(name: &str, cpf: &str) -> Result<Self, DomainError> {
        let name: String = name.trim().to_string();
        let cpf: Cpf = Cpf::new(cpf);
        validate_employee_fields(&name, &cpf)?;
        Ok(Self { name, cpf })
    }

    /// Returns the employee's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee's CPF.
    #[must_use]
    pub const fn cpf(&self) -> &Cpf {
        &self.cpf
    }
}

/// A persisted equipment item (EPI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// The identifier assigned by the database.
    pub equipment_id: i64,
    /// The equipment name.
    pub name: String,
    /// A free-text description.
    pub description: String,
    /// The expiry, stored as entered.
    pub expiry: String,
}

impl Equipment {
    /// Creates an equipment item from stored values.
    #[must_use]
    pub const fn new(equipment_id: i64, name: String, description: String, expiry: String) -> Self {
        Self {
            equipment_id,
            name,
            description,
            expiry,
        }
    }
}

impl std::fmt::Display for Equipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Equipment: {} {} {}>",
            self.equipment_id, self.name, self.description
        )
    }
}

/// Validated field values for creating or updating an equipment item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEquipment {
    name: String,
    description: String,
    expiry: String,
}

impl NewEquipment {
    /// Builds validated equipment fields.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is empty or too long.
    pub fn new(name: &str, description: &str, expiry: &str) -> Result<Self, DomainError> {
        let name: String = name.trim().to_string();
        let description: String = description.trim().to_string();
        let expiry: String = expiry.trim().to_string();
        validate_equipment_fields(&name, &description, &expiry)?;
        Ok(Self {
            name,
            description,
            expiry,
        })
    }

    /// Returns the equipment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the expiry.
    #[must_use]
    pub fn expiry(&self) -> &str {
        &self.expiry
    }
}

/// A persisted delivery of one equipment item to one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// The identifier assigned by the database.
    pub delivery_id: i64,
    /// The delivery date, stored as entered.
    pub delivery_date: String,
    /// The approval certificate number (CA).
    pub approval_code: i32,
    /// The validity period.
    pub period: i32,
    /// The receiving employee.
    pub employee_id: i64,
    /// The delivered equipment item.
    pub equipment_id: i64,
}

impl std::fmt::Display for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Delivery: {} {} {} {}>",
            self.delivery_date, self.approval_code, self.employee_id, self.equipment_id
        )
    }
}

/// Validated field values for creating or updating a delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDelivery {
    delivery_date: String,
    approval_code: i32,
    period: i32,
    employee_id: i64,
    equipment_id: i64,
}

impl NewDelivery {
    /// Builds validated delivery fields.
    ///
    /// # Arguments
    ///
    /// * `delivery_date` - The delivery date
    /// * `approval_code` - The approval certificate number (CA)
    /// * `period` - The validity period
    /// * `employee_id` - The receiving employee
    /// * `equipment_id` - The delivered equipment item
    ///
    /// # Errors
    ///
    /// Returns an error if the date is empty or too long, or if the approval
    /// code or period is negative.
    pub fn new(
        delivery_date: &str,
        approval_code: i32,
        period: i32,
        employee_id: i64,
        equipment_id: i64,
    ) -> Result<Self, DomainError> {
        let delivery_date: String = delivery_date.trim().to_string();
        validate_delivery_fields(&delivery_date, approval_code, period)?;
        Ok(Self {
            delivery_date,
            approval_code,
            period,
            employee_id,
            equipment_id,
        })
    }

    /// Returns the delivery date.
    #[must_use]
    pub fn delivery_date(&self) -> &str {
        &self.delivery_date
    }

    /// Returns the approval code (CA).
    #[must_use]
    pub const fn approval_code(&self) -> i32 {
        self.approval_code
    }

    /// Returns the validity period.
    #[must_use]
    pub const fn period(&self) -> i32 {
        self.period
    }

    /// Returns the receiving employee's identifier.
    #[must_use]
    pub const fn employee_id(&self) -> i64 {
        self.employee_id
    }

    /// Returns the delivered equipment item's identifier.
    #[must_use]
    pub const fn equipment_id(&self) -> i64 {
        self.equipment_id
    }
}
