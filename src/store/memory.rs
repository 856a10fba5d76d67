//! In-memory store implementation.
//!
//! Stores rows in a `HashMap` behind an `RwLock`, suitable for tests and
//! local development where a MySQL instance is not available. Enforces the
//! same email uniqueness the database schema does.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{EmployeeError, EmployeeResult};
use crate::model::employee::{Employee, NewEmployee};
use crate::store::EmployeeStore;

#[derive(Clone)]
pub struct MemoryEmployeeStore {
    data: Arc<RwLock<MemoryData>>,
}

struct MemoryData {
    rows: HashMap<u64, Employee>,
    next_id: u64,
}

impl Default for MemoryData {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            next_id: 1,
        }
    }
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(MemoryData::default())),
        }
    }

    /// Number of stored rows. Test helper.
    pub fn row_count(&self) -> usize {
        self.data.read().unwrap().rows.len()
    }
}

impl Default for MemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn find_by_id(&self, id: u64) -> EmployeeResult<Option<Employee>> {
        Ok(self.data.read().unwrap().rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> EmployeeResult<Vec<Employee>> {
        let data = self.data.read().unwrap();
        Ok(data
            .rows
            .values()
            .filter(|employee| employee.email == email)
            .cloned()
            .collect())
    }

    async fn exists_by_id(&self, id: u64) -> EmployeeResult<bool> {
        Ok(self.data.read().unwrap().rows.contains_key(&id))
    }

    async fn insert(&self, employee: NewEmployee) -> EmployeeResult<Employee> {
        let mut data = self.data.write().unwrap();

        // Same rejection the unique key on email produces in MySQL.
        if data.rows.values().any(|row| row.email == employee.email) {
            return Err(EmployeeError::AlreadyExists(employee.email));
        }

        let id = data.next_id;
        data.next_id += 1;

        let row = Employee {
            id,
            email: employee.email,
            name: employee.name,
            salary: employee.salary,
        };
        data.rows.insert(id, row.clone());

        Ok(row)
    }

    async fn update(&self, employee: &Employee) -> EmployeeResult<Employee> {
        let mut data = self.data.write().unwrap();

        match data.rows.get_mut(&employee.id) {
            Some(row) => {
                row.name = employee.name.clone();
                row.salary = employee.salary;
                Ok(row.clone())
            }
            None => Err(EmployeeError::NotFound(employee.id)),
        }
    }

    async fn delete_by_id(&self, id: u64) -> EmployeeResult<()> {
        let mut data = self.data.write().unwrap();

        match data.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(EmployeeError::NotFound(id)),
        }
    }
}
