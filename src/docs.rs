use crate::model::employee::{Employee, EmployeeDto};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Record Service API",
        version = "1.0.0",
        description = r#"
## Employee Record Service

A minimal employee record management API.

### 🔹 Key Features
- **Employee Management**
  - Create, view, update, and delete employee records
- **Validation**
  - Email uniqueness on creation
  - Email immutability on update

### 📦 Response Format
- JSON-based RESTful responses
- Failures carry a `message` field describing the offending id or email

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee
    ),
    components(
        schemas(
            Employee,
            EmployeeDto
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
    )
)]
pub struct ApiDoc;
