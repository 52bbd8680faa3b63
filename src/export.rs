use thiserror::Error;
use tracing::debug;

use crate::cache::DashboardCache;
use crate::summary::{BundleOutcome, Dataset, Table};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unknown export: {0}")]
    UnknownFile(String),

    #[error("{0}")]
    NoData(String),

    #[error("could not encode {file_name}: {source}")]
    Encode {
        file_name: String,
        source: std::io::Error,
    },
}

/// A CSV download ready to be sent as an attachment.
#[derive(Debug)]
pub struct CsvExport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl CsvExport {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }
}

fn export_table(cache: &DashboardCache, dataset: Dataset) -> Result<Table, ExportError> {
    if dataset == Dataset::PlatformStats {
        return Ok(cache.platform_stats().export_table());
    }

    let outcome = cache.bundle();
    match outcome {
        BundleOutcome::Loaded(bundle) => bundle
            .table(dataset)
            .cloned()
            .ok_or_else(|| ExportError::NoData(format!("{} was not loaded", dataset))),
        BundleOutcome::NoData { .. } => Err(ExportError::NoData(
            outcome.error_message().unwrap_or_default(),
        )),
    }
}

pub fn export_csv(cache: &DashboardCache, file_name: &str) -> Result<CsvExport, ExportError> {
    let dataset = Dataset::from_file_name(file_name)
        .ok_or_else(|| ExportError::UnknownFile(file_name.to_owned()))?;

    let table = export_table(cache, dataset)?;
    let bytes = table.to_csv_bytes().map_err(|source| ExportError::Encode {
        file_name: file_name.to_owned(),
        source,
    })?;

    debug!("Exporting {} ({} rows)", file_name, table.len());
    Ok(CsvExport {
        file_name: dataset.file_name(),
        bytes,
    })
}
