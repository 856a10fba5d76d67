//! Storage abstraction for employee rows.
//!
//! The trait defines the row-level operations the service depends on,
//! allowing different backends (MySQL, in-memory) to be swapped via
//! dependency injection.

pub mod memory;
pub mod mysql;

pub use memory::MemoryEmployeeStore;
pub use mysql::MySqlEmployeeStore;

use async_trait::async_trait;

use crate::error::EmployeeResult;
use crate::model::employee::{Employee, NewEmployee};

/// Row storage for the `employee` table.
///
/// Implementations must be `Send + Sync` so a single store can be shared
/// across actix workers behind an `Arc`.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Fetch a row by primary key. `Ok(None)` when no row matches.
    async fn find_by_id(&self, id: u64) -> EmployeeResult<Option<Employee>>;

    /// Fetch all rows with the given email. The unique constraint means
    /// this returns zero or one row in practice.
    async fn find_by_email(&self, email: &str) -> EmployeeResult<Vec<Employee>>;

    /// Whether a row with the given id exists.
    async fn exists_by_id(&self, id: u64) -> EmployeeResult<bool>;

    /// Persist a new row and return it with its storage-assigned id.
    ///
    /// A unique-constraint rejection on email surfaces as
    /// `EmployeeError::AlreadyExists`, never as a fatal error.
    async fn insert(&self, employee: NewEmployee) -> EmployeeResult<Employee>;

    /// Persist the mutable fields (`name`, `salary`) of an existing row.
    async fn update(&self, employee: &Employee) -> EmployeeResult<Employee>;

    /// Remove a row by primary key.
    async fn delete_by_id(&self, id: u64) -> EmployeeResult<()>;
}
