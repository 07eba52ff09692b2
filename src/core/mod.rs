pub mod csv_output;
pub mod etl;
pub mod window;

pub use crate::domain::model::{ExportSummary, Item, Order, Paging, TimeWindow};
pub use crate::domain::ports::{ConfigProvider, ReceiptSource};
pub use crate::utils::error::Result;
