// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Equipment queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use safeguard_domain::Equipment;
use tracing::debug;

use crate::diesel_schema::equipment;
use crate::error::PersistenceError;

/// Diesel Queryable struct for equipment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = equipment)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct EquipmentRow {
    equipment_id: i64,
    name: String,
    description: String,
    expiry: String,
}

impl From<EquipmentRow> for Equipment {
    fn from(row: EquipmentRow) -> Self {
        Self::new(row.equipment_id, row.name, row.description, row.expiry)
    }
}

/// Lists all equipment items ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_equipment(conn: &mut SqliteConnection) -> Result<Vec<Equipment>, PersistenceError> {
    debug!("Listing all equipment");

    let rows: Vec<EquipmentRow> = equipment::table
        .order(equipment::equipment_id.asc())
        .select(EquipmentRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Equipment::from).collect())
}

/// Retrieves an equipment item by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the item is not found.
pub fn get_equipment_by_id(
    conn: &mut SqliteConnection,
    equipment_id: i64,
) -> Result<Option<Equipment>, PersistenceError> {
    debug!("Looking up equipment by ID: {}", equipment_id);

    let row: Option<EquipmentRow> = equipment::table
        .find(equipment_id)
        .select(EquipmentRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(Equipment::from))
}
