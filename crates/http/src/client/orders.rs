//! Order API client methods

use super::{ClientError, CristalClient};
use cristal_core::types::{NewOrder, Order};

impl CristalClient {
    /// List all orders
    pub async fn list_orders(&self) -> Result<Vec<Order>, ClientError> {
        self.get("/orders/").await
    }

    /// Create a new order
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ClientError> {
        self.post("/orders/", order).await
    }
}
