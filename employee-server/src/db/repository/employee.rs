//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult, is_unique_violation};
use crate::db::models::{DepartmentSalary, Employee, EmployeeCreate};
use serde_json::{Map, Value};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Table holding one document per employee
pub const TABLE: &str = "employees";

/// Unique index on `employee_id`
pub const EMPLOYEE_ID_INDEX: &str = "employee_id_unique";

// Explicit projection keeps the record id out of API payloads
const FIELDS: &str = "employee_id, name, department, salary, joining_date, skills";

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Define the unique index on `employee_id` if it does not exist yet
    pub async fn ensure_indexes(&self) -> RepoResult<()> {
        self.base
            .db()
            .query(format!(
                "DEFINE INDEX IF NOT EXISTS {EMPLOYEE_ID_INDEX} ON TABLE {TABLE} FIELDS employee_id UNIQUE"
            ))
            .await?
            .check()?;
        Ok(())
    }

    /// Find employee by business identifier
    pub async fn find_by_employee_id(&self, employee_id: &str) -> RepoResult<Option<Employee>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT {FIELDS} FROM {TABLE} WHERE employee_id = $employee_id LIMIT 1"
            ))
            .bind(("employee_id", employee_id.to_string()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Create a new employee
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let employee_id = data.employee_id.clone();
        let duplicate =
            || RepoError::Duplicate(format!("Employee with ID '{}' already exists.", employee_id));

        // Check duplicate id; the unique index still catches concurrent inserts
        if self.find_by_employee_id(&employee_id).await?.is_some() {
            return Err(duplicate());
        }

        let result = self
            .base
            .db()
            .query(format!("CREATE {TABLE} CONTENT $data RETURN NONE"))
            .bind(("data", data))
            .await?;

        if let Err(e) = result.check() {
            if is_unique_violation(&e) {
                return Err(duplicate());
            }
            return Err(e.into());
        }

        self.find_by_employee_id(&employee_id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Merge the given fields into the matching employee
    ///
    /// `changes` holds stored-form values only (see `EmployeeUpdate::changes`).
    pub async fn update(&self, employee_id: &str, changes: Map<String, Value>) -> RepoResult<Employee> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "UPDATE {TABLE} MERGE $changes WHERE employee_id = $employee_id RETURN {FIELDS}"
            ))
            .bind(("changes", Value::Object(changes)))
            .bind(("employee_id", employee_id.to_string()))
            .await?;

        let updated: Vec<Employee> = result.take(0)?;
        updated.into_iter().next().ok_or_else(|| {
            RepoError::NotFound(format!("Employee with ID '{}' not found", employee_id))
        })
    }

    /// Hard delete an employee, returning whether exactly one record was removed
    pub async fn delete(&self, employee_id: &str) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "DELETE {TABLE} WHERE employee_id = $employee_id RETURN BEFORE"
            ))
            .bind(("employee_id", employee_id.to_string()))
            .await?;

        let deleted: Vec<Employee> = result.take(0)?;
        Ok(deleted.len() == 1)
    }

    /// One page of employees, newest joiners first, ties by `employee_id`
    pub async fn find_page(
        &self,
        department: Option<&str>,
        limit: u32,
        offset: u64,
    ) -> RepoResult<Vec<Employee>> {
        let filter = if department.is_some() {
            " WHERE department = $department"
        } else {
            ""
        };

        let mut query = self
            .base
            .db()
            .query(format!(
                "SELECT {FIELDS} FROM {TABLE}{filter} ORDER BY joining_date DESC, employee_id ASC LIMIT $limit START $offset"
            ))
            .bind(("limit", limit))
            .bind(("offset", offset));
        if let Some(department) = department {
            query = query.bind(("department", department.to_string()));
        }

        let employees: Vec<Employee> = query.await?.take(0)?;
        Ok(employees)
    }

    /// Mean salary per department, sorted by department name
    pub async fn average_salary_by_department(&self) -> RepoResult<Vec<DepartmentSalary>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT department, math::mean(salary) AS avg_salary FROM {TABLE} GROUP BY department ORDER BY department ASC"
            ))
            .await?;

        let averages: Vec<DepartmentSalary> = result.take(0)?;
        Ok(averages.into_iter().map(DepartmentSalary::rounded).collect())
    }

    /// Employees whose skill list contains `skill` verbatim
    pub async fn find_by_skill(&self, skill: &str) -> RepoResult<Vec<Employee>> {
        let mut result = self
            .base
            .db()
            .query(format!("SELECT {FIELDS} FROM {TABLE} WHERE skills CONTAINS $skill"))
            .bind(("skill", skill.to_string()))
            .await?;

        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees)
    }
}
