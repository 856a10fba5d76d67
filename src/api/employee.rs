use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::error;

use crate::error::EmployeeError;
use crate::model::employee::EmployeeDto;
use crate::service::employee::EmployeeService;

// -------------------- Error mapping --------------------

// The service raises domain errors; only this layer picks status codes.
fn error_response(err: EmployeeError) -> HttpResponse {
    match err {
        EmployeeError::NotFound(_) => HttpResponse::NotFound().json(json!({
            "message": err.to_string()
        })),
        EmployeeError::AlreadyExists(_) => HttpResponse::Conflict().json(json!({
            "message": err.to_string()
        })),
        EmployeeError::ImmutableEmail => HttpResponse::UnprocessableEntity().json(json!({
            "message": err.to_string()
        })),
        EmployeeError::Database(ref db_err) => {
            error!(error = %db_err, "Unexpected storage failure");
            HttpResponse::InternalServerError().json(json!({
                "message": "Something went wrong, Contact with system admin"
            }))
        }
    }
}

// -------------------- Handlers --------------------

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeDto),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found with id: 1"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    Ok(match service.get_by_id(employee_id).await {
        Ok(employee) => HttpResponse::Ok().json(employee),
        Err(err) => error_response(err),
    })
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = EmployeeDto,
    responses(
        (status = 201, description = "Employee created successfully", body = EmployeeDto),
        (status = 409, description = "Email already registered", body = Object, example = json!({
            "message": "Employee already exists with email: john.doe@company.com"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    service: web::Data<EmployeeService>,
    payload: web::Json<EmployeeDto>,
) -> impl Responder {
    match service.create(payload.into_inner()).await {
        Ok(employee) => HttpResponse::Created().json(employee),
        Err(err) => error_response(err),
    }
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/employees/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    request_body = EmployeeDto,
    responses(
        (status = 200, description = "Employee updated successfully", body = EmployeeDto),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found with id: 1"
        })),
        (status = 422, description = "Attempted to change the email", body = Object, example = json!({
            "message": "The email of the employee cannot be updated"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<u64>,
    payload: web::Json<EmployeeDto>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    Ok(match service.update(employee_id, payload.into_inner()).await {
        Ok(employee) => HttpResponse::Ok().json(employee),
        Err(err) => error_response(err),
    })
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found with id: 1"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    Ok(match service.delete(employee_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    })
}
