//! Bulk CSV importer for the security compliance dashboard.
//!
//! A CSV export for one record kind is read, each row validated, rows grouped
//! by month and year and then by business unit or framework, and the
//! resulting nested records posted to the dashboard API one at a time.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
