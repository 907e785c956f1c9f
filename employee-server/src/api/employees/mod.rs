//! Employee API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
///
/// Static segments (`avg-salary`, `search`) take precedence over `{employee_id}`.
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/employees", get(handler::list).post(handler::create))
        .route("/employees/avg-salary", get(handler::average_salary))
        .route("/employees/search", get(handler::search_by_skill))
        .route(
            "/employees/{employee_id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
