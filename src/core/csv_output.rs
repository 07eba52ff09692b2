use crate::domain::model::{Item, Order};
use crate::utils::error::{ExportError, Result};
use serde::Serialize;
use std::io::Write;

pub const HEADER: [&str; 6] = ["order", "time", "name", "count", "unit", "price"];

#[derive(Debug, Serialize)]
struct ItemRow<'a> {
    order: &'a str,
    time: &'a str,
    name: &'a str,
    count: String,
    unit: &'a str,
    price: String,
}

impl<'a> ItemRow<'a> {
    fn new(order: &'a Order, item: &'a Item) -> Self {
        Self {
            order: &order.id,
            time: &order.created,
            name: &item.name,
            count: format_decimal(item.count),
            unit: &item.unit,
            price: format_decimal(item.price),
        }
    }
}

/// Fixed six-digit decimal notation, never exponent form.
pub fn format_decimal(value: f32) -> String {
    format!("{:.6}", value)
}

/// Streams item rows as CSV. The header goes out on construction.
pub struct CsvItemWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvItemWriter<W> {
    pub fn new(output: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(output);

        writer.write_record(HEADER)?;
        tracing::debug!("CSV header written");

        Ok(Self { writer })
    }

    /// Writes one row per item, then flushes so the whole order reaches the stream.
    pub fn write_order(&mut self, order: &Order, items: &[Item]) -> Result<usize> {
        for item in items {
            self.writer.serialize(ItemRow::new(order, item))?;
        }
        self.writer.flush()?;

        Ok(items.len())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| ExportError::IoError(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            created: "2024-03-05T18:21:07.123+02:00".to_string(),
            store_id: 2043,
        }
    }

    fn item(name: &str, count: f32, price: f32) -> Item {
        Item {
            name: name.to_string(),
            unit: "pcs".to_string(),
            count,
            price,
        }
    }

    fn output(writer: CsvItemWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_header_only_when_nothing_written() {
        let writer = CsvItemWriter::new(Vec::new()).unwrap();
        assert_eq!(output(writer), "order,time,name,count,unit,price\n");
    }

    #[test]
    fn test_one_row_per_item_with_order_fields() {
        let mut writer = CsvItemWriter::new(Vec::new()).unwrap();
        let items = vec![item("Bread", 1.0, 32.5), item("Apples", 1.5, 54.0)];

        assert_eq!(writer.write_order(&order("c-1"), &items).unwrap(), 2);

        let text = output(writer);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "order,time,name,count,unit,price");
        assert_eq!(
            lines[1],
            "c-1,2024-03-05T18:21:07.123+02:00,Bread,1.000000,pcs,32.500000"
        );
        assert_eq!(
            lines[2],
            "c-1,2024-03-05T18:21:07.123+02:00,Apples,1.500000,pcs,54.000000"
        );
    }

    #[test]
    fn test_order_without_items_writes_nothing() {
        let mut writer = CsvItemWriter::new(Vec::new()).unwrap();

        assert_eq!(writer.write_order(&order("c-empty"), &[]).unwrap(), 0);
        assert_eq!(output(writer), "order,time,name,count,unit,price\n");
    }

    #[derive(Default)]
    struct CountingSink {
        bytes: Vec<u8>,
        flushes: usize,
    }

    impl Write for CountingSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_every_order_is_flushed_even_when_empty() {
        let mut writer = CsvItemWriter::new(CountingSink::default()).unwrap();
        writer.write_order(&order("c-1"), &[item("Tea", 1.0, 1.0)]).unwrap();
        assert_eq!(writer.writer.get_ref().flushes, 1);
        writer.write_order(&order("c-2"), &[]).unwrap();
        assert_eq!(writer.writer.get_ref().flushes, 2);

        let sink = writer.into_inner().unwrap();
        let text = String::from_utf8(sink.bytes).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_rows_reach_sink_before_next_order() {
        let mut writer = CsvItemWriter::new(CountingSink::default()).unwrap();
        writer.write_order(&order("c-1"), &[item("Tea", 1.0, 1.0)]).unwrap();

        let written = String::from_utf8(writer.writer.get_ref().bytes.clone()).unwrap();
        assert!(written.ends_with("Tea,1.000000,pcs,1.000000\n"));
    }

    #[test]
    fn test_header_written_exactly_once() {
        let mut writer = CsvItemWriter::new(Vec::new()).unwrap();
        writer.write_order(&order("c-1"), &[item("Tea", 1.0, 1.0)]).unwrap();
        writer.write_order(&order("c-2"), &[item("Tea", 2.0, 1.0)]).unwrap();

        let text = output(writer);
        assert_eq!(text.matches("order,time,name").count(), 1);
        assert!(text.starts_with("order,time,name,count,unit,price\n"));
    }

    #[test]
    fn test_decimal_formatting_never_uses_exponent() {
        assert_eq!(format_decimal(1.5), "1.500000");
        assert_eq!(format_decimal(0.333333), "0.333333");
        assert_eq!(format_decimal(120000.0), "120000.000000");
        assert!(!format_decimal(1.0e-7).contains('e'));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut writer = CsvItemWriter::new(Vec::new()).unwrap();
        writer
            .write_order(&order("c-1"), &[item("Cheese, hard \"Gouda\"", 0.25, 420.0)])
            .unwrap();

        let text = output(writer);
        assert!(text.contains("\"Cheese, hard \"\"Gouda\"\"\",0.250000"));
    }
}
