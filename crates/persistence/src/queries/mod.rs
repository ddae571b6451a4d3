// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `employees`: Employee listing and lookup by ID
//! - `equipment`: Equipment listing and lookup by ID
//! - `deliveries`: Delivery listing and lookup by ID
//!
//! Listings are ordered by primary key so callers see rows in insertion order.

pub mod deliveries;
pub mod employees;
pub mod equipment;

pub use deliveries::{get_delivery_by_id, list_deliveries};
pub use employees::{get_employee_by_id, list_employees};
pub use equipment::{get_equipment_by_id, list_equipment};
