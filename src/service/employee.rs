//! Validation and CRUD orchestration over the employee store.

use std::sync::Arc;

use tracing::debug;

use crate::error::{EmployeeError, EmployeeResult};
use crate::model::employee::{EmployeeDto, NewEmployee};
use crate::store::EmployeeStore;

/// Orchestrates validation, storage calls and mapping for the employee
/// resource. Stateless apart from the stored rows; every operation is a
/// single logical transaction.
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    pub async fn get_by_id(&self, id: u64) -> EmployeeResult<EmployeeDto> {
        let employee = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(id))?;

        Ok(employee.into())
    }

    /// Persist a new employee. Any id supplied on the input is ignored; the
    /// store assigns one.
    pub async fn create(&self, dto: EmployeeDto) -> EmployeeResult<EmployeeDto> {
        let existing = self.store.find_by_email(&dto.email).await?;
        if !existing.is_empty() {
            return Err(EmployeeError::AlreadyExists(dto.email));
        }

        let created = self.store.insert(NewEmployee::from(dto)).await?;
        debug!(id = created.id, "Created employee");

        Ok(created.into())
    }

    /// Apply `name` and `salary` from the input onto the stored row. The
    /// email is immutable once set; id and email always come from the
    /// stored row, never from the input.
    pub async fn update(&self, id: u64, dto: EmployeeDto) -> EmployeeResult<EmployeeDto> {
        let mut employee = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(id))?;

        if dto.email != employee.email {
            return Err(EmployeeError::ImmutableEmail);
        }

        employee.name = dto.name;
        employee.salary = dto.salary;

        let updated = self.store.update(&employee).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: u64) -> EmployeeResult<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(EmployeeError::NotFound(id));
        }

        self.store.delete_by_id(id).await
    }
}
