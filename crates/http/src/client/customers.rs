//! Customer API client methods

use super::{ClientError, CristalClient};
use cristal_core::types::{Customer, Order};

impl CristalClient {
    /// Fetch a customer by username
    pub async fn get_customer(&self, username: &str) -> Result<Customer, ClientError> {
        self.get(&format!("/customers/{username}/")).await
    }

    /// Order history for a customer
    pub async fn customer_orders(&self, username: &str) -> Result<Vec<Order>, ClientError> {
        self.get(&format!("/customers/{username}/orders/")).await
    }
}
