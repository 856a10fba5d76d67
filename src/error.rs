/// Result type for employee operations
pub type EmployeeResult<T> = Result<T, EmployeeError>;

/// Domain error taxonomy raised by the service and store layers.
///
/// Messages embed the offending id/email so the boundary can return them
/// verbatim. Translating an error kind into an HTTP status code is the
/// handler layer's job, not this type's.
#[derive(Debug, thiserror::Error)]
pub enum EmployeeError {
    #[error("Employee not found with id: {0}")]
    NotFound(u64),

    #[error("Employee already exists with email: {0}")]
    AlreadyExists(String),

    #[error("The email of the employee cannot be updated")]
    ImmutableEmail,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for EmployeeError {
    fn from(err: sqlx::Error) -> Self {
        EmployeeError::Database(err.to_string())
    }
}
