// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delivery mutations.
//!
//! Employee and equipment references are not looked up beforehand. The
//! foreign key constraints reject dangling references and the resulting
//! error surfaces as `PersistenceError::ForeignKeyViolation`.

use diesel::SqliteConnection;
use diesel::prelude::*;
use safeguard_domain::{Delivery, NewDelivery};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::deliveries;
use crate::error::PersistenceError;
use crate::queries::deliveries::get_delivery_by_id;

fn to_delivery(delivery_id: i64, delivery: &NewDelivery) -> Delivery {
    Delivery {
        delivery_id,
        delivery_date: delivery.delivery_date().to_string(),
        approval_code: delivery.approval_code(),
        period: delivery.period(),
        employee_id: delivery.employee_id(),
        equipment_id: delivery.equipment_id(),
    }
}

/// Creates a new delivery.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyViolation` if the employee or
/// equipment item does not exist, or another error if the insert fails.
pub fn create_delivery(
    conn: &mut SqliteConnection,
    delivery: &NewDelivery,
) -> Result<Delivery, PersistenceError> {
    info!(
        employee_id = delivery.employee_id(),
        equipment_id = delivery.equipment_id(),
        approval_code = delivery.approval_code(),
        "Creating delivery"
    );

    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(deliveries::table)
            .values((
                deliveries::delivery_date.eq(delivery.delivery_date()),
                deliveries::approval_code.eq(delivery.approval_code()),
                deliveries::period.eq(delivery.period()),
                deliveries::employee_id.eq(delivery.employee_id()),
                deliveries::equipment_id.eq(delivery.equipment_id()),
            ))
            .execute(conn)?;

        let delivery_id: i64 = conn.get_last_insert_rowid()?;

        info!(delivery_id, "Delivery created successfully");
        Ok(to_delivery(delivery_id, delivery))
    })
}

/// Replaces the fields of an existing delivery.
///
/// # Errors
///
/// Returns an error if:
/// - The delivery does not exist (`NotFound`)
/// - The new employee or equipment reference does not exist (`ForeignKeyViolation`)
/// - The database update fails
pub fn update_delivery(
    conn: &mut SqliteConnection,
    delivery_id: i64,
    delivery: &NewDelivery,
) -> Result<Delivery, PersistenceError> {
    info!(delivery_id, "Updating delivery");

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let rows_affected: usize = diesel::update(deliveries::table.find(delivery_id))
            .set((
                deliveries::delivery_date.eq(delivery.delivery_date()),
                deliveries::approval_code.eq(delivery.approval_code()),
                deliveries::period.eq(delivery.period()),
                deliveries::employee_id.eq(delivery.employee_id()),
                deliveries::equipment_id.eq(delivery.equipment_id()),
            ))
            .execute(conn)?;

        if rows_affected == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Delivery with ID {delivery_id} not found"
            )));
        }

        Ok(to_delivery(delivery_id, delivery))
    })
}

/// Deletes a delivery and returns the row as it was before deletion.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the delivery does not exist, or
/// another error if the delete fails.
pub fn delete_delivery(
    conn: &mut SqliteConnection,
    delivery_id: i64,
) -> Result<Delivery, PersistenceError> {
    info!("Attempting to delete delivery ID: {}", delivery_id);

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let snapshot: Delivery = get_delivery_by_id(conn, delivery_id)?.ok_or_else(|| {
            PersistenceError::NotFound(format!("Delivery with ID {delivery_id} not found"))
        })?;

        diesel::delete(deliveries::table.find(delivery_id)).execute(conn)?;

        info!("Deleted delivery ID: {}", delivery_id);
        Ok(snapshot)
    })
}
