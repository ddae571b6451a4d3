// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for employee, equipment, and delivery records.

use safeguard_domain::{Delivery, Employee, Equipment, NewDelivery, NewEmployee, NewEquipment};
use safeguard_persistence::{Persistence, PersistenceError};
use tracing::debug;

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    DeliveryInfo, DeliveryRequest, DeliveryResponse, EmployeeInfo, EmployeeRequest,
    EmployeeResponse, EquipmentInfo, EquipmentRequest, EquipmentResponse,
    RemovedEquipmentResponse, STATUS_REMOVED, STATUS_SUCCESS,
};

const EMPLOYEE: &str = "Employee";
const EQUIPMENT: &str = "Equipment";
const DELIVERY: &str = "Delivery";

/// Maps a CPF collision to a message naming the CPF.
fn employee_write_error(err: PersistenceError, cpf: &str) -> ApiError {
    match err {
        PersistenceError::UniqueViolation(_) => ApiError::DuplicateResource {
            resource_type: EMPLOYEE.to_string(),
            message: format!("CPF '{cpf}' is already registered"),
        },
        other => translate_persistence_error(other, EMPLOYEE),
    }
}

/// Maps a foreign key failure on delivery writes to a message naming the
/// referenced ids.
fn delivery_write_error(err: PersistenceError, delivery: &NewDelivery) -> ApiError {
    match err {
        PersistenceError::ForeignKeyViolation(_) => ApiError::ReferenceViolation {
            message: format!(
                "Employee {} or equipment {} does not exist",
                delivery.employee_id(),
                delivery.equipment_id()
            ),
        },
        other => translate_persistence_error(other, DELIVERY),
    }
}

/// Maps a foreign key failure on removal of a referenced record.
fn referenced_delete_error(err: PersistenceError, resource_type: &str, id: i64) -> ApiError {
    match err {
        PersistenceError::ForeignKeyViolation(_) => ApiError::ReferenceViolation {
            message: format!("{resource_type} {id} is still referenced by deliveries"),
        },
        other => translate_persistence_error(other, resource_type),
    }
}

/// Creates a new employee.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The employee fields from the request body
///
/// # Errors
///
/// Returns an error if:
/// - The name or CPF fails validation
/// - The CPF is already registered
/// - The database operation fails
pub fn create_employee(
    persistence: &mut Persistence,
    request: &EmployeeRequest,
) -> Result<EmployeeResponse, ApiError> {
    let input: NewEmployee =
        NewEmployee::new(&request.name, &request.cpf).map_err(translate_domain_error)?;

    let employee: Employee = persistence
        .create_employee(&input)
        .map_err(|e| employee_write_error(e, input.cpf().value()))?;

    debug!(employee_id = employee.employee_id, "Employee created");
    Ok(EmployeeResponse::from_employee(STATUS_SUCCESS, &employee))
}

/// Lists all employees ordered by identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_employees(persistence: &mut Persistence) -> Result<Vec<EmployeeInfo>, ApiError> {
    let employees: Vec<Employee> = persistence
        .list_employees()
        .map_err(|e| translate_persistence_error(e, EMPLOYEE))?;

    Ok(employees.into_iter().map(EmployeeInfo::from).collect())
}

/// Replaces the name and CPF of an existing employee.
///
/// # Errors
///
/// Returns an error if:
/// - The name or CPF fails validation
/// - No employee has the given identifier
/// - The new CPF belongs to another employee
/// - The database operation fails
pub fn update_employee(
    persistence: &mut Persistence,
    employee_id: i64,
    request: &EmployeeRequest,
) -> Result<EmployeeResponse, ApiError> {
    let input: NewEmployee =
        NewEmployee::new(&request.name, &request.cpf).map_err(translate_domain_error)?;

    let employee: Employee = persistence
        .update_employee(employee_id, &input)
        .map_err(|e| employee_write_error(e, input.cpf().value()))?;

    Ok(EmployeeResponse::from_employee(STATUS_SUCCESS, &employee))
}

/// Removes an employee and returns the removed record.
///
/// # Errors
///
/// Returns an error if:
/// - No employee has the given identifier
/// - Deliveries still reference the employee
/// - The database operation fails
pub fn delete_employee(
    persistence: &mut Persistence,
    employee_id: i64,
) -> Result<EmployeeResponse, ApiError> {
    let removed: Employee = persistence
        .delete_employee(employee_id)
        .map_err(|e| referenced_delete_error(e, EMPLOYEE, employee_id))?;

    Ok(EmployeeResponse::from_employee(STATUS_REMOVED, &removed))
}

/// Creates a new equipment item.
///
/// # Errors
///
/// Returns an error if a field fails validation or the database operation
/// fails.
pub fn create_equipment(
    persistence: &mut Persistence,
    request: &EquipmentRequest,
) -> Result<EquipmentResponse, ApiError> {
    let input: NewEquipment =
        NewEquipment::new(&request.name, &request.description, &request.expiry)
            .map_err(translate_domain_error)?;

    let item: Equipment = persistence
        .create_equipment(&input)
        .map_err(|e| translate_persistence_error(e, EQUIPMENT))?;

    debug!(equipment_id = item.equipment_id, "Equipment created");
    Ok(EquipmentResponse::success(&item))
}

/// Lists all equipment items ordered by identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_equipment(persistence: &mut Persistence) -> Result<Vec<EquipmentInfo>, ApiError> {
    let items: Vec<Equipment> = persistence
        .list_equipment()
        .map_err(|e| translate_persistence_error(e, EQUIPMENT))?;

    Ok(items.into_iter().map(EquipmentInfo::from).collect())
}

/// Replaces the fields of an existing equipment item.
///
/// # Errors
///
/// Returns an error if a field fails validation, no item has the given
/// identifier, or the database operation fails.
pub fn update_equipment(
    persistence: &mut Persistence,
    equipment_id: i64,
    request: &EquipmentRequest,
) -> Result<EquipmentResponse, ApiError> {
    let input: NewEquipment =
        NewEquipment::new(&request.name, &request.description, &request.expiry)
            .map_err(translate_domain_error)?;

    let item: Equipment = persistence
        .update_equipment(equipment_id, &input)
        .map_err(|e| translate_persistence_error(e, EQUIPMENT))?;

    Ok(EquipmentResponse::success(&item))
}

/// Removes an equipment item and returns the removed record.
///
/// # Errors
///
/// Returns an error if:
/// - No item has the given identifier
/// - Deliveries still reference the item
/// - The database operation fails
pub fn delete_equipment(
    persistence: &mut Persistence,
    equipment_id: i64,
) -> Result<RemovedEquipmentResponse, ApiError> {
    let removed: Equipment = persistence
        .delete_equipment(equipment_id)
        .map_err(|e| referenced_delete_error(e, EQUIPMENT, equipment_id))?;

    Ok(RemovedEquipmentResponse::from(removed))
}

/// Records a new delivery.
///
/// The referenced employee and equipment item are not looked up first;
/// the database rejects dangling references.
///
/// # Errors
///
/// Returns an error if:
/// - The date, approval code, or period fails validation
/// - The employee or equipment item does not exist
/// - The database operation fails
pub fn create_delivery(
    persistence: &mut Persistence,
    request: &DeliveryRequest,
) -> Result<DeliveryResponse, ApiError> {
    let input: NewDelivery = new_delivery(request)?;

    let delivery: Delivery = persistence
        .create_delivery(&input)
        .map_err(|e| delivery_write_error(e, &input))?;

    debug!(delivery_id = delivery.delivery_id, "Delivery created");
    Ok(DeliveryResponse::from_delivery(STATUS_SUCCESS, &delivery))
}

/// Lists all deliveries ordered by identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_deliveries(persistence: &mut Persistence) -> Result<Vec<DeliveryInfo>, ApiError> {
    let deliveries: Vec<Delivery> = persistence
        .list_deliveries()
        .map_err(|e| translate_persistence_error(e, DELIVERY))?;

    Ok(deliveries.into_iter().map(DeliveryInfo::from).collect())
}

/// Replaces the fields of an existing delivery.
///
/// # Errors
///
/// Returns an error if:
/// - A field fails validation
/// - No delivery has the given identifier
/// - The employee or equipment item does not exist
/// - The database operation fails
pub fn update_delivery(
    persistence: &mut Persistence,
    delivery_id: i64,
    request: &DeliveryRequest,
) -> Result<DeliveryResponse, ApiError> {
    let input: NewDelivery = new_delivery(request)?;

    let delivery: Delivery = persistence
        .update_delivery(delivery_id, &input)
        .map_err(|e| delivery_write_error(e, &input))?;

    Ok(DeliveryResponse::from_delivery(STATUS_SUCCESS, &delivery))
}

/// Removes a delivery and returns the removed record.
///
/// # Errors
///
/// Returns an error if no delivery has the given identifier or the
/// database operation fails.
pub fn delete_delivery(
    persistence: &mut Persistence,
    delivery_id: i64,
) -> Result<DeliveryResponse, ApiError> {
    let removed: Delivery = persistence
        .delete_delivery(delivery_id)
        .map_err(|e| translate_persistence_error(e, DELIVERY))?;

    Ok(DeliveryResponse::from_delivery(STATUS_REMOVED, &removed))
}

fn new_delivery(request: &DeliveryRequest) -> Result<NewDelivery, ApiError> {
    NewDelivery::new(
        &request.delivery_date,
        request.approval_code,
        request.period,
        request.employee_id,
        request.equipment_id,
    )
    .map_err(translate_domain_error)
}
