use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "email": "john.doe@company.com",
        "name": "John Doe",
        "salary": 60000
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = 60000)]
    pub salary: i64,
}

/// Boundary shape exchanged with HTTP callers. `id` is ignored on create and
/// always present on responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDto {
    #[serde(default)]
    #[schema(example = 1, nullable = true)]
    pub id: Option<u64>,

    #[schema(example = "john.doe@company.com", format = "email", value_type = String)]
    pub email: String,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = 60000)]
    pub salary: i64,
}

/// Insert shape. Carries no id, the store assigns one.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub email: String,
    pub name: String,
    pub salary: i64,
}

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        Self {
            id: Some(employee.id),
            email: employee.email,
            name: employee.name,
            salary: employee.salary,
        }
    }
}

impl From<EmployeeDto> for NewEmployee {
    fn from(dto: EmployeeDto) -> Self {
        Self {
            email: dto.email,
            name: dto.name,
            salary: dto.salary,
        }
    }
}
