use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;

use crate::error::{EmployeeError, EmployeeResult};
use crate::model::employee::{Employee, NewEmployee};
use crate::store::EmployeeStore;

/// MySQL-backed store over the `employee` table.
pub struct MySqlEmployeeStore {
    pool: MySqlPool,
}

impl MySqlEmployeeStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for MySqlEmployeeStore {
    async fn find_by_id(&self, id: u64) -> EmployeeResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, email, name, salary FROM employee WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn find_by_email(&self, email: &str) -> EmployeeResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, email, name, salary FROM employee WHERE email = ?",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn exists_by_id(&self, id: u64) -> EmployeeResult<bool> {
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM employee WHERE id = ?)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(found != 0)
    }

    async fn insert(&self, employee: NewEmployee) -> EmployeeResult<Employee> {
        let result = sqlx::query("INSERT INTO employee (email, name, salary) VALUES (?, ?, ?)")
            .bind(&employee.email)
            .bind(&employee.name)
            .bind(employee.salary)
            .execute(&self.pool)
            .await;

        // Two concurrent creates can both pass the service pre-check; the
        // unique key on email rejects the second write here.
        let result = match result {
            Ok(res) => res,
            Err(err) => {
                if err
                    .as_database_error()
                    .map_or(false, |db| db.is_unique_violation())
                {
                    return Err(EmployeeError::AlreadyExists(employee.email));
                }
                return Err(err.into());
            }
        };

        let id = result.last_insert_id();
        debug!(id, email = %employee.email, "Inserted employee");

        Ok(Employee {
            id,
            email: employee.email,
            name: employee.name,
            salary: employee.salary,
        })
    }

    async fn update(&self, employee: &Employee) -> EmployeeResult<Employee> {
        sqlx::query("UPDATE employee SET name = ?, salary = ? WHERE id = ?")
            .bind(&employee.name)
            .bind(employee.salary)
            .bind(employee.id)
            .execute(&self.pool)
            .await?;

        Ok(employee.clone())
    }

    async fn delete_by_id(&self, id: u64) -> EmployeeResult<()> {
        sqlx::query("DELETE FROM employee WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
