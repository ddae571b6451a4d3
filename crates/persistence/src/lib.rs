// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the SafeGuard EPI tracker.
//!
//! This crate stores employees, equipment items, and deliveries in a
//! `SQLite` database through Diesel. The schema is created by embedded
//! migrations when a connection is opened.
//!
//! ## Referential Integrity
//!
//! Foreign key enforcement is switched on for every connection and checked
//! at startup. A delivery can only reference existing employees and
//! equipment items, and a referenced employee or item cannot be deleted.
//!
//! ## Testing Philosophy
//!
//! - Tests run against isolated in-memory databases (`Persistence::new_in_memory`)
//! - Each in-memory database has a unique name, so tests never share state

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use safeguard_domain::{
    Delivery, Employee, Equipment, NewDelivery, NewEmployee, NewEquipment,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for employees, equipment, and deliveries.
///
/// The adapter owns a single connection. Callers that share it across
/// requests wrap it in a mutex and pass it explicitly.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_safeguard_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if it does not exist.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Employees
    // ========================================================================

    /// Persists a new employee.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the CPF is already in use.
    pub fn create_employee(&mut self, employee: &NewEmployee) -> Result<Employee, PersistenceError> {
        mutations::create_employee(&mut self.conn, employee)
    }

    /// Lists all employees ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_employees(&mut self) -> Result<Vec<Employee>, PersistenceError> {
        queries::list_employees(&mut self.conn)
    }

    /// Retrieves an employee by ID, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn get_employee_by_id(
        &mut self,
        employee_id: i64,
    ) -> Result<Option<Employee>, PersistenceError> {
        queries::get_employee_by_id(&mut self.conn, employee_id)
    }

    /// Replaces the fields of an existing employee.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the employee does not exist and
    /// `UniqueViolation` if the CPF belongs to another employee.
    pub fn update_employee(
        &mut self,
        employee_id: i64,
        employee: &NewEmployee,
    ) -> Result<Employee, PersistenceError> {
        mutations::update_employee(&mut self.conn, employee_id, employee)
    }

    /// Deletes an employee and returns its last state.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the employee does not exist and
    /// `ForeignKeyViolation` if a delivery still references it.
    pub fn delete_employee(&mut self, employee_id: i64) -> Result<Employee, PersistenceError> {
        mutations::delete_employee(&mut self.conn, employee_id)
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    /// Persists a new equipment item.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_equipment(&mut self, item: &NewEquipment) -> Result<Equipment, PersistenceError> {
        mutations::create_equipment(&mut self.conn, item)
    }

    /// Lists all equipment items ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_equipment(&mut self) -> Result<Vec<Equipment>, PersistenceError> {
        queries::list_equipment(&mut self.conn)
    }

    /// Retrieves an equipment item by ID, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn get_equipment_by_id(
        &mut self,
        equipment_id: i64,
    ) -> Result<Option<Equipment>, PersistenceError> {
        queries::get_equipment_by_id(&mut self.conn, equipment_id)
    }

    /// Replaces the fields of an existing equipment item.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the item does not exist.
    pub fn update_equipment(
        &mut self,
        equipment_id: i64,
        item: &NewEquipment,
    ) -> Result<Equipment, PersistenceError> {
        mutations::update_equipment(&mut self.conn, equipment_id, item)
    }

    /// Deletes an equipment item and returns its last state.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the item does not exist and
    /// `ForeignKeyViolation` if a delivery still references it.
    pub fn delete_equipment(&mut self, equipment_id: i64) -> Result<Equipment, PersistenceError> {
        mutations::delete_equipment(&mut self.conn, equipment_id)
    }

    // ========================================================================
    // Deliveries
    // ========================================================================

    /// Persists a new delivery.
    ///
    /// # Errors
    ///
    /// Returns `ForeignKeyViolation` if the employee or equipment item
    /// does not exist.
    pub fn create_delivery(&mut self, delivery: &NewDelivery) -> Result<Delivery, PersistenceError> {
        mutations::create_delivery(&mut self.conn, delivery)
    }

    /// Lists all deliveries ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_deliveries(&mut self) -> Result<Vec<Delivery>, PersistenceError> {
        queries::list_deliveries(&mut self.conn)
    }

    /// Retrieves a delivery by ID, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn get_delivery_by_id(
        &mut self,
        delivery_id: i64,
    ) -> Result<Option<Delivery>, PersistenceError> {
        queries::get_delivery_by_id(&mut self.conn, delivery_id)
    }

    /// Replaces the fields of an existing delivery.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the delivery does not exist and
    /// `ForeignKeyViolation` if a new reference does not exist.
    pub fn update_delivery(
        &mut self,
        delivery_id: i64,
        delivery: &NewDelivery,
    ) -> Result<Delivery, PersistenceError> {
        mutations::update_delivery(&mut self.conn, delivery_id, delivery)
    }

    /// Deletes a delivery and returns its last state.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the delivery does not exist.
    pub fn delete_delivery(&mut self, delivery_id: i64) -> Result<Delivery, PersistenceError> {
        mutations::delete_delivery(&mut self.conn, delivery_id)
    }
}
