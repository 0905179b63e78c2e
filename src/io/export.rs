use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::application::{ExportError, IncomeExpenseSummary};
use crate::domain::{Ledger, Transaction, format_cents};

/// Header row of the CSV export
pub const CSV_HEADER: [&str; 5] = ["ID", "Amount", "Category", "Date", "Type"];

/// Date column format in exports
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// `.json` (any case) selects JSON; everything else is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }
}

/// Full ledger snapshot for JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub summary: IncomeExpenseSummary,
    pub transactions: Vec<Transaction>,
}

/// Exporter for writing ledger data out
pub struct Exporter<'a> {
    ledger: &'a Ledger,
}

impl<'a> Exporter<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Export transactions to CSV, one row per transaction in ledger order.
    /// Returns the number of data rows written.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(CSV_HEADER)?;

        let mut count = 0;
        for transaction in self.ledger.list() {
            csv_writer.write_record([
                transaction.id().to_string(),
                format_cents(transaction.amount()),
                transaction.category().to_string(),
                transaction.date().format(DATE_FORMAT).to_string(),
                transaction.kind().as_str().to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Create (or truncate) `path` and export CSV into it. Everything is
    /// flushed before this returns Ok; a failed write leaves whatever was
    /// already written in place.
    pub fn export_csv_file(&self, path: impl AsRef<Path>) -> Result<usize, ExportError> {
        let path = path.as_ref();
        let result = create_file(path).and_then(|file| self.export_csv(file));
        log_outcome(path, &result);
        result
    }

    /// Export the whole ledger, with its summary, as pretty-printed JSON.
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<LedgerSnapshot, ExportError> {
        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            summary: IncomeExpenseSummary::from_ledger(self.ledger),
            transactions: self.ledger.list().to_vec(),
        };

        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(snapshot)
    }

    pub fn export_json_file(&self, path: impl AsRef<Path>) -> Result<usize, ExportError> {
        let path = path.as_ref();
        let result = create_file(path)
            .and_then(|file| self.export_json(BufWriter::new(file)))
            .map(|snapshot| snapshot.transactions.len());
        log_outcome(path, &result);
        result
    }

    /// Export to `path` in the format its extension selects.
    pub fn export_file(&self, path: impl AsRef<Path>) -> Result<usize, ExportError> {
        let path = path.as_ref();
        match ExportFormat::from_path(path) {
            ExportFormat::Csv => self.export_csv_file(path),
            ExportFormat::Json => self.export_json_file(path),
        }
    }
}

impl Ledger {
    /// Write the ledger as CSV to `path`, returning the number of data rows.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<usize, ExportError> {
        Exporter::new(self).export_csv_file(path)
    }
}

fn create_file(path: &Path) -> Result<File, ExportError> {
    File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })
}

fn log_outcome(path: &Path, result: &Result<usize, ExportError>) {
    match result {
        Ok(count) => info!(path = %path.display(), count, "exported transactions"),
        Err(err) => warn!(path = %path.display(), error = %err, "export failed"),
    }
}
