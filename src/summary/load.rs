use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use super::hidden_gems::display_table;
use super::{
    Dataset, HiddenGem, HiddenGemsSummary, LoadError, PlatformStats, PlatformStatsOutcome, Table,
};

/// Loads the platform stats record, substituting the default record when the
/// file is missing or unreadable.
pub fn load_platform_stats(summary_dir: &Path) -> PlatformStatsOutcome {
    let path = summary_dir.join(Dataset::PlatformStats.file_name());
    let loaded = Table::from_path(&path)
        .and_then(|table| PlatformStats::from_table(&table).map(|stats| (stats, table)));

    match loaded {
        Ok((stats, table)) => {
            info!("Loaded platform stats from {:?}", path);
            PlatformStatsOutcome::Loaded { stats, table }
        }
        Err(err) => {
            warn!("Using default platform stats, {:?} not usable: {}", path, err);
            PlatformStatsOutcome::Fallback {
                stats: PlatformStats::default(),
                reason: err.to_string(),
            }
        }
    }
}

/// The tables backing the insights page.
#[derive(Debug)]
pub struct SummaryBundle {
    tables: HashMap<Dataset, Table>,
    hidden_gems: Vec<HiddenGem>,
}

impl SummaryBundle {
    pub fn table(&self, dataset: Dataset) -> Option<&Table> {
        self.tables.get(&dataset)
    }

    pub fn hidden_gems(&self) -> &[HiddenGem] {
        &self.hidden_gems
    }

    pub fn hidden_gems_count(&self) -> usize {
        self.hidden_gems.len()
    }

    /// The first rows of the hidden gems table, as displayed.
    pub fn hidden_gems_display(&self) -> Table {
        self.tables
            .get(&Dataset::HiddenGems)
            .map(display_table)
            .unwrap_or_default()
    }

    pub fn hidden_gems_summary(&self) -> HiddenGemsSummary {
        HiddenGemsSummary::from_gems(&self.hidden_gems)
    }
}

#[derive(Debug)]
pub enum BundleOutcome {
    Loaded(SummaryBundle),
    NoData { dataset: Dataset, error: LoadError },
}

impl BundleOutcome {
    pub fn bundle(&self) -> Option<&SummaryBundle> {
        match self {
            BundleOutcome::Loaded(bundle) => Some(bundle),
            BundleOutcome::NoData { .. } => None,
        }
    }

    /// Human readable description of why there is no data.
    pub fn error_message(&self) -> Option<String> {
        match self {
            BundleOutcome::Loaded(_) => None,
            BundleOutcome::NoData { dataset, error } => {
                Some(format!("Error loading {}: {}", dataset, error))
            }
        }
    }
}

/// Loads every secondary dataset. A single failure discards the whole bundle.
pub fn load_bundle(summary_dir: &Path) -> BundleOutcome {
    match try_load_bundle(summary_dir) {
        Ok(bundle) => {
            info!(
                "Loaded {} summary tables, {} hidden gems",
                bundle.tables.len(),
                bundle.hidden_gems.len()
            );
            BundleOutcome::Loaded(bundle)
        }
        Err((dataset, error)) => {
            warn!("Summary data unavailable, {} failed: {}", dataset, error);
            BundleOutcome::NoData { dataset, error }
        }
    }
}

fn try_load_bundle(summary_dir: &Path) -> Result<SummaryBundle, (Dataset, LoadError)> {
    let mut tables = HashMap::new();
    for dataset in Dataset::SECONDARY {
        let path = summary_dir.join(dataset.file_name());
        let table = Table::from_path(&path).map_err(|err| (dataset, err))?;
        tables.insert(dataset, table);
    }

    let hidden_gems = tables
        .get(&Dataset::HiddenGems)
        .map(HiddenGem::parse_table)
        .unwrap_or_else(|| Ok(Vec::new()))
        .map_err(|err| (Dataset::HiddenGems, err))?;

    Ok(SummaryBundle {
        tables,
        hidden_gems,
    })
}
