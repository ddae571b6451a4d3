// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use safeguard_domain::{Employee, NewEmployee};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::employees;
use crate::error::PersistenceError;
use crate::queries::employees::get_employee_by_id;

/// Creates a new employee.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee` - The validated employee fields
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the CPF is already in use,
/// or another error if the insert fails.
pub fn create_employee(
    conn: &mut SqliteConnection,
    employee: &NewEmployee,
) -> Result<Employee, PersistenceError> {
    info!(
        name = employee.name(),
        cpf = %employee.cpf(),
        "Creating employee"
    );

    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(employees::table)
            .values((
                employees::name.eq(employee.name()),
                employees::cpf.eq(employee.cpf().value()),
            ))
            .execute(conn)?;

        let employee_id: i64 = conn.get_last_insert_rowid()?;

        info!(employee_id, "Employee created successfully");

        Ok(Employee::new(
            employee_id,
            employee.name().to_string(),
            employee.cpf().clone(),
        ))
    })
}

/// Replaces the name and CPF of an existing employee.
///
/// # Errors
///
/// Returns an error if:
/// - The employee does not exist (`NotFound`)
/// - The new CPF belongs to another employee (`UniqueViolation`)
/// - The database update fails
pub fn update_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
    employee: &NewEmployee,
) -> Result<Employee, PersistenceError> {
    info!(employee_id, "Updating employee");

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let rows_affected: usize = diesel::update(employees::table.find(employee_id))
            .set((
                employees::name.eq(employee.name()),
                employees::cpf.eq(employee.cpf().value()),
            ))
            .execute(conn)?;

        if rows_affected == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Employee with ID {employee_id} not found"
            )));
        }

        Ok(Employee::new(
            employee_id,
            employee.name().to_string(),
            employee.cpf().clone(),
        ))
    })
}

/// Deletes an employee and returns the row as it was before deletion.
///
/// # Errors
///
/// Returns an error if:
/// - The employee does not exist (`NotFound`)
/// - The employee is still referenced by a delivery (`ForeignKeyViolation`)
/// - The database operation fails
pub fn delete_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Employee, PersistenceError> {
    info!("Attempting to delete employee ID: {}", employee_id);

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let snapshot: Employee = get_employee_by_id(conn, employee_id)?.ok_or_else(|| {
            PersistenceError::NotFound(format!("Employee with ID {employee_id} not found"))
        })?;

        diesel::delete(employees::table.find(employee_id)).execute(conn)?;

        info!("Deleted employee ID: {}", employee_id);
        Ok(snapshot)
    })
}
