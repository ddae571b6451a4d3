// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delivery queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use safeguard_domain::Delivery;
use tracing::debug;

use crate::diesel_schema::deliveries;
use crate::error::PersistenceError;

/// Diesel Queryable struct for delivery rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = deliveries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct DeliveryRow {
    delivery_id: i64,
    delivery_date: String,
    approval_code: i32,
    period: i32,
    employee_id: i64,
    equipment_id: i64,
}

impl From<DeliveryRow> for Delivery {
    fn from(row: DeliveryRow) -> Self {
        Self {
            delivery_id: row.delivery_id,
            delivery_date: row.delivery_date,
            approval_code: row.approval_code,
            period: row.period,
            employee_id: row.employee_id,
            equipment_id: row.equipment_id,
        }
    }
}

/// Lists all deliveries ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_deliveries(conn: &mut SqliteConnection) -> Result<Vec<Delivery>, PersistenceError> {
    debug!("Listing all deliveries");

    let rows: Vec<DeliveryRow> = deliveries::table
        .order(deliveries::delivery_id.asc())
        .select(DeliveryRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Delivery::from).collect())
}

/// Retrieves a delivery by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the delivery is not found.
pub fn get_delivery_by_id(
    conn: &mut SqliteConnection,
    delivery_id: i64,
) -> Result<Option<Delivery>, PersistenceError> {
    debug!("Looking up delivery by ID: {}", delivery_id);

    let row: Option<DeliveryRow> = deliveries::table
        .find(delivery_id)
        .select(DeliveryRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(Delivery::from))
}
