//! Employee API client methods

use super::{ClientError, CristalClient};
use cristal_core::types::{Employee, JobPosition, NewEmployee};

impl CristalClient {
    /// List all employees
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
        self.get("/employees/").await
    }

    /// Register a new employee
    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ClientError> {
        self.post("/employees/", employee).await
    }

    /// List the job positions an employee can hold
    pub async fn list_positions(&self) -> Result<Vec<JobPosition>, ClientError> {
        self.get("/positions/").await
    }
}
