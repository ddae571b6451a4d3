// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Equipment mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use safeguard_domain::{Equipment, NewEquipment};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::equipment;
use crate::error::PersistenceError;
use crate::queries::equipment::get_equipment_by_id;

fn to_equipment(equipment_id: i64, item: &NewEquipment) -> Equipment {
    Equipment::new(
        equipment_id,
        item.name().to_string(),
        item.description().to_string(),
        item.expiry().to_string(),
    )
}

/// Creates a new equipment item.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_equipment(
    conn: &mut SqliteConnection,
    item: &NewEquipment,
) -> Result<Equipment, PersistenceError> {
    info!(name = item.name(), "Creating equipment");

    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(equipment::table)
            .values((
                equipment::name.eq(item.name()),
                equipment::description.eq(item.description()),
                equipment::expiry.eq(item.expiry()),
            ))
            .execute(conn)?;

        let equipment_id: i64 = conn.get_last_insert_rowid()?;

        info!(equipment_id, "Equipment created successfully");
        Ok(to_equipment(equipment_id, item))
    })
}

/// Replaces the fields of an existing equipment item.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the item does not exist, or
/// another error if the update fails.
pub fn update_equipment(
    conn: &mut SqliteConnection,
    equipment_id: i64,
    item: &NewEquipment,
) -> Result<Equipment, PersistenceError> {
    info!(equipment_id, "Updating equipment");

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let rows_affected: usize = diesel::update(equipment::table.find(equipment_id))
            .set((
                equipment::name.eq(item.name()),
                equipment::description.eq(item.description()),
                equipment::expiry.eq(item.expiry()),
            ))
            .execute(conn)?;

        if rows_affected == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Equipment with ID {equipment_id} not found"
            )));
        }

        Ok(to_equipment(equipment_id, item))
    })
}

/// Deletes an equipment item and returns the row as it was before deletion.
///
/// # Errors
///
/// Returns an error if:
/// - The item does not exist (`NotFound`)
/// - The item is still referenced by a delivery (`ForeignKeyViolation`)
/// - The database operation fails
pub fn delete_equipment(
    conn: &mut SqliteConnection,
    equipment_id: i64,
) -> Result<Equipment, PersistenceError> {
    info!("Attempting to delete equipment ID: {}", equipment_id);

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let snapshot: Equipment = get_equipment_by_id(conn, equipment_id)?.ok_or_else(|| {
            PersistenceError::NotFound(format!("Equipment with ID {equipment_id} not found"))
        })?;

        diesel::delete(equipment::table.find(equipment_id)).execute(conn)?;

        info!("Deleted equipment ID: {}", equipment_id);
        Ok(snapshot)
    })
}
