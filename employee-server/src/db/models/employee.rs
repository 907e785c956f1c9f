//! Employee Model

use super::{Patch, serde_helpers};
use crate::utils::validation::{null_field, validate_not_blank, validate_positive};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

/// Employee document as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Employee {
    #[serde(deserialize_with = "serde_helpers::trimmed")]
    #[validate(custom(function = "validate_not_blank"))]
    pub employee_id: String,
    pub name: String,
    pub department: String,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than zero"))]
    pub salary: f64,
    /// Serialized as `YYYY-MM-DD`
    pub joining_date: NaiveDate,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Create employee payload
pub type EmployeeCreate = Employee;

/// Update employee payload
///
/// Only supplied keys are written. `employee_id` cannot be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub department: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub salary: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub joining_date: Patch<NaiveDate>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub skills: Patch<Vec<String>>,
}

impl EmployeeUpdate {
    /// True when no field was supplied at all
    pub fn is_empty(&self) -> bool {
        self.name.is_missing()
            && self.department.is_missing()
            && self.salary.is_missing()
            && self.joining_date.is_missing()
            && self.skills.is_missing()
    }

    /// Supplied fields in stored form, ready for a merge update
    pub fn changes(&self) -> Result<Map<String, Value>, ValidationErrors> {
        self.validate()?;

        let mut fields = Map::new();
        if let Some(name) = self.name.as_value() {
            fields.insert("name".into(), Value::from(name.as_str()));
        }
        if let Some(department) = self.department.as_value() {
            fields.insert("department".into(), Value::from(department.as_str()));
        }
        if let Some(salary) = self.salary.as_value() {
            fields.insert("salary".into(), Value::from(*salary));
        }
        if let Some(date) = self.joining_date.as_value() {
            fields.insert("joining_date".into(), Value::from(iso_date(date)));
        }
        if let Some(skills) = self.skills.as_value() {
            fields.insert("skills".into(), Value::from(skills.clone()));
        }
        Ok(fields)
    }
}

impl Validate for EmployeeUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name == Patch::Null {
            errors.add("name", null_field("name"));
        }
        if self.department == Patch::Null {
            errors.add("department", null_field("department"));
        }
        match &self.salary {
            Patch::Null => errors.add("salary", null_field("salary")),
            Patch::Value(salary) => {
                if let Err(e) = validate_positive(*salary) {
                    errors.add("salary", e);
                }
            }
            Patch::Missing => {}
        }
        if self.joining_date == Patch::Null {
            errors.add("joining_date", null_field("joining_date"));
        }
        if self.skills == Patch::Null {
            errors.add("skills", null_field("skills"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Average salary of one department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSalary {
    pub department: String,
    pub avg_salary: f64,
}

impl DepartmentSalary {
    /// Round `avg_salary` to two decimal places, half to even
    pub fn rounded(mut self) -> Self {
        self.avg_salary = (self.avg_salary * 100.0).round_ties_even() / 100.0;
        self
    }
}

/// ISO-8601 calendar date (`YYYY-MM-DD`)
pub fn iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
