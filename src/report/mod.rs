//! Report module - total computation, table-image rendering and export

mod exporter;
mod format;
mod opener;
mod renderer;

pub use exporter::{export_filename, Exporter};
pub use format::format_currency;
pub use opener::{FileOpener, SystemOpener};
pub use renderer::TableRenderer;

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::parse::PartsTable;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("render failed: {0}")]
    Render(String),
    #[error("PNG encoding failed: {0}")]
    Encode(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A parsed table together with its due date and chargeback total.
#[derive(Debug, Clone)]
pub struct Report {
    pub table: PartsTable,
    pub due_date: NaiveDate,
    pub total: i64,
}

impl Report {
    /// Build a report, summing the numeric prices. Rows without a numeric
    /// price contribute nothing.
    pub fn new(table: PartsTable, due_date: NaiveDate) -> Self {
        let total = table.iter().filter_map(|r| r.amount).sum();
        Self {
            table,
            due_date,
            total,
        }
    }

    /// Title drawn at the top of the rendered image.
    pub fn title(&self) -> String {
        format!(
            "Pending RMA Part Removal - Due {} | Chargeback: ${}",
            self.due_date.format("%Y-%m-%d"),
            format_currency(self.total)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_pullback_text;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_total_sums_numeric_prices() {
        let text = "RMA\tModel/Serial\tPart\tPrice\n1\ta\tFan\t$45.99\n2\tb\tPSU\t500\n";
        let table = parse_pullback_text(text).unwrap();
        let report = Report::new(table, due());
        assert_eq!(report.total, 545);
    }

    #[test]
    fn test_unparseable_price_contributes_zero() {
        let text = "RMA\tModel/Serial\tPart\tPrice\n1\ta\tFan\tpending\n2\tb\tPSU\t10\n";
        let table = parse_pullback_text(text).unwrap();
        let report = Report::new(table, due());
        assert_eq!(report.table.len(), 2);
        assert_eq!(report.total, 10);
    }

    #[test]
    fn test_empty_table_total_zero() {
        let report = Report::new(Vec::new(), due());
        assert_eq!(report.total, 0);
    }

    #[test]
    fn test_title_embeds_date_and_total() {
        let text = "RMA\tModel/Serial\tPart\tPrice\n1\ta\tb\t1234567\n";
        let table = parse_pullback_text(text).unwrap();
        let report = Report::new(table, due());
        assert_eq!(
            report.title(),
            "Pending RMA Part Removal - Due 2024-03-15 | Chargeback: $1,234,567.00"
        );
    }
}
