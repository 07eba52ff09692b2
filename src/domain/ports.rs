use crate::domain::model::{Item, Order, Paging, TimeWindow};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn months(&self) -> u32;
    fn paging(&self) -> Paging;
}

/// Where checks and their items come from.
#[async_trait]
pub trait ReceiptSource: Send + Sync {
    async fn fetch_orders(&self, window: &TimeWindow, paging: Paging) -> Result<Vec<Order>>;
    async fn fetch_items(&self, order: &Order) -> Result<Vec<Item>>;
}
