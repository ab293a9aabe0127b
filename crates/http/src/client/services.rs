//! Service catalogue API client methods

use super::{ClientError, CristalClient};
use cristal_core::types::{NewService, Service};

impl CristalClient {
    /// List the offered services
    pub async fn list_services(&self) -> Result<Vec<Service>, ClientError> {
        self.get("/services/").await
    }

    /// Add a new service to the catalogue
    pub async fn create_service(&self, service: &NewService) -> Result<Service, ClientError> {
        self.post("/services/", service).await
    }
}
