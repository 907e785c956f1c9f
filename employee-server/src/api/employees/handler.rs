//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use validator::Validate;

use crate::api::extract::{ValidJson, ValidQuery};
use crate::core::ServerState;
use crate::db::models::{DepartmentSalary, Employee, EmployeeCreate, EmployeeUpdate};
use crate::utils::types::{MessageResponse, PaginationParams};
use crate::utils::validation::validate_not_blank;
use crate::utils::{AppError, AppResult};

/// Optional department filter for listing
#[derive(Debug, Deserialize, Validate)]
pub struct DepartmentFilter {
    pub department: Option<String>,
}

impl DepartmentFilter {
    /// Department to filter on; an empty value means no filter
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref().filter(|d| !d.is_empty())
    }
}

/// Query params for skill search
#[derive(Debug, Deserialize, Validate)]
pub struct SkillQuery {
    #[validate(custom(function = "validate_not_blank"))]
    pub skill: String,
}

fn not_found(employee_id: &str) -> AppError {
    AppError::not_found(format!("Employee with ID '{}' not found", employee_id))
}

/// POST /employees - create an employee
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let repo = state.employees()?;
    let employee = repo.create(payload).await?;

    tracing::info!(employee_id = %employee.employee_id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /employees/{employee_id} - fetch one employee
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = state.employees()?;
    let employee = repo
        .find_by_employee_id(&employee_id)
        .await?
        .ok_or_else(|| not_found(&employee_id))?;
    Ok(Json(employee))
}

/// PUT /employees/{employee_id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
    ValidJson(payload): ValidJson<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let repo = state.employees()?;
    if payload.is_empty() {
        return Err(AppError::EmptyUpdate);
    }

    let changes = payload.changes()?;
    let employee = repo.update(&employee_id, changes).await?;

    tracing::info!(employee_id = %employee_id, "Employee updated");
    Ok(Json(employee))
}

/// DELETE /employees/{employee_id} - remove an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = state.employees()?;
    if !repo.delete(&employee_id).await? {
        return Err(not_found(&employee_id));
    }

    tracing::info!(employee_id = %employee_id, "Employee deleted");
    Ok(Json(MessageResponse::new(format!(
        "Employee with ID '{}' deleted successfully.",
        employee_id
    ))))
}

/// GET /employees?department=&page=&page_size= - paginated list
pub async fn list(
    State(state): State<ServerState>,
    ValidQuery(pagination): ValidQuery<PaginationParams>,
    ValidQuery(filter): ValidQuery<DepartmentFilter>,
) -> AppResult<Json<Vec<Employee>>> {
    let repo = state.employees()?;
    let employees = repo
        .find_page(filter.department(), pagination.limit(), pagination.offset())
        .await?;
    Ok(Json(employees))
}

/// GET /employees/avg-salary - average salary per department
pub async fn average_salary(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<DepartmentSalary>>> {
    let repo = state.employees()?;
    let averages = repo.average_salary_by_department().await?;
    Ok(Json(averages))
}

/// GET /employees/search?skill= - exact, case-sensitive skill match
pub async fn search_by_skill(
    State(state): State<ServerState>,
    ValidQuery(query): ValidQuery<SkillQuery>,
) -> AppResult<Json<Vec<Employee>>> {
    let repo = state.employees()?;
    let employees = repo.find_by_skill(&query.skill).await?;
    Ok(Json(employees))
}
