//! Database Models

// Serde helpers
pub mod serde_helpers;

pub mod employee;

// Re-exports
pub use employee::{DepartmentSalary, Employee, EmployeeCreate, EmployeeUpdate};
pub use serde_helpers::Patch;
