use crate::core::csv_output::CsvItemWriter;
use crate::domain::model::{ExportSummary, Paging, TimeWindow};
use crate::domain::ports::ReceiptSource;
use crate::utils::error::Result;
use std::io::Write;

/// Walks windows → checks → items → rows, strictly one request at a time.
pub struct ExportEngine<S: ReceiptSource, W: Write> {
    source: S,
    output: CsvItemWriter<W>,
    paging: Paging,
}

impl<S: ReceiptSource, W: Write> ExportEngine<S, W> {
    /// Writes the CSV header immediately; a failure here aborts before any request.
    pub fn new(source: S, output: W, paging: Paging) -> Result<Self> {
        let output = CsvItemWriter::new(output).map_err(|e| e.at("writing CSV header"))?;
        Ok(Self {
            source,
            output,
            paging,
        })
    }

    pub async fn run(&mut self, windows: &[TimeWindow]) -> Result<ExportSummary> {
        let mut summary = ExportSummary::default();
        tracing::info!("Exporting checks for {} monthly windows", windows.len());

        for window in windows {
            let orders = self
                .source
                .fetch_orders(window, self.paging)
                .await
                .map_err(|e| e.at(format!("fetching checks for {}", window)))?;

            tracing::info!("📅 {}: {} checks", window, orders.len());
            if self.paging.limit > 0 && orders.len() >= self.paging.limit as usize {
                tracing::warn!(
                    "{}: page is full ({} checks), later checks in this month were not fetched",
                    window,
                    orders.len()
                );
                summary.full_pages += 1;
            }

            for order in &orders {
                let items = self
                    .source
                    .fetch_items(order)
                    .await
                    .map_err(|e| e.at(format!("fetching items of check {}", order.id)))?;

                tracing::debug!("Check {}: {} items", order.id, items.len());
                self.output
                    .write_order(order, &items)
                    .map_err(|e| e.at(format!("writing rows of check {}", order.id)))?;

                summary.items += items.len();
            }

            summary.orders += orders.len();
            summary.windows += 1;
        }

        Ok(summary)
    }

    pub fn into_output(self) -> Result<W> {
        self.output.into_inner()
    }
}
