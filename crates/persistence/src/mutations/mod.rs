// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! Each mutation runs inside a single transaction and either commits in
//! full or leaves the database untouched.
//!
//! ## Module Organization
//!
//! - `employees`: Employee create, update, delete
//! - `equipment`: Equipment create, update, delete
//! - `deliveries`: Delivery create, update, delete

pub mod deliveries;
pub mod employees;
pub mod equipment;

pub use deliveries::{create_delivery, delete_delivery, update_delivery};
pub use employees::{create_employee, delete_employee, update_employee};
pub use equipment::{create_equipment, delete_equipment, update_equipment};
