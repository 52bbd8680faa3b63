use serde::{Deserialize, Serialize};

use super::{LoadError, Table};

/// Headline numbers shown on both pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub total_ratings: String,
    pub total_users: String,
    pub total_movies: String,
    pub avg_rating: f64,
}

impl Default for PlatformStats {
    fn default() -> Self {
        PlatformStats {
            total_ratings: "33.8M".to_owned(),
            total_users: "331K".to_owned(),
            total_movies: "86K".to_owned(),
            avg_rating: 3.53,
        }
    }
}

impl PlatformStats {
    /// Builds the record from the first row of a platform stats table.
    pub fn from_table(table: &Table) -> Result<PlatformStats, LoadError> {
        let mut records: Vec<PlatformStats> = table.deserialize_rows()?;
        if records.is_empty() {
            return Err(LoadError::Schema("platform stats table has no rows".to_owned()));
        }
        Ok(records.swap_remove(0))
    }

    pub fn formatted_avg_rating(&self) -> String {
        format!("{:.2}★", self.avg_rating)
    }

    /// A one-row table carrying this record, used when no source table exists.
    pub fn to_table(&self) -> Table {
        Table::new(
            vec![
                "total_ratings".to_owned(),
                "total_users".to_owned(),
                "total_movies".to_owned(),
                "avg_rating".to_owned(),
            ],
            vec![vec![
                self.total_ratings.clone(),
                self.total_users.clone(),
                self.total_movies.clone(),
                self.avg_rating.to_string(),
            ]],
        )
    }
}

#[derive(Debug)]
pub enum PlatformStatsOutcome {
    Loaded { stats: PlatformStats, table: Table },
    Fallback { stats: PlatformStats, reason: String },
}

impl PlatformStatsOutcome {
    pub fn stats(&self) -> &PlatformStats {
        match self {
            PlatformStatsOutcome::Loaded { stats, .. } => stats,
            PlatformStatsOutcome::Fallback { stats, .. } => stats,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, PlatformStatsOutcome::Fallback { .. })
    }

    /// The table to export: the source table if there was one.
    pub fn export_table(&self) -> Table {
        match self {
            PlatformStatsOutcome::Loaded { table, .. } => table.clone(),
            PlatformStatsOutcome::Fallback { stats, .. } => stats.to_table(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_first_row() {
        let table = Table::from_reader(
            "total_ratings,total_users,total_movies,avg_rating\n33.8M,331K,86K,3.53\n".as_bytes(),
        )
        .unwrap();
        let stats = PlatformStats::from_table(&table).unwrap();
        assert_eq!(stats, PlatformStats::default());
        assert_eq!(stats.formatted_avg_rating(), "3.53★");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let table = Table::from_reader(
            "avg_rating,total_movies,total_users,total_ratings,generated_at\n\
             3.1,10K,2K,1.2M,2024-05-01\n"
                .as_bytes(),
        )
        .unwrap();
        let stats = PlatformStats::from_table(&table).unwrap();
        assert_eq!(stats.total_ratings, "1.2M");
        assert_eq!(stats.total_users, "2K");
        assert_eq!(stats.total_movies, "10K");
        assert_eq!(stats.avg_rating, 3.1);
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let table =
            Table::from_reader("total_ratings,total_users\n33.8M,331K\n".as_bytes()).unwrap();
        assert!(matches!(
            PlatformStats::from_table(&table),
            Err(LoadError::Schema(_))
        ));
    }

    #[test]
    fn non_numeric_rating_is_a_schema_error() {
        let table = Table::from_reader(
            "total_ratings,total_users,total_movies,avg_rating\n33.8M,331K,86K,high\n".as_bytes(),
        )
        .unwrap();
        assert!(PlatformStats::from_table(&table).is_err());
    }

    #[test]
    fn rating_is_rounded_to_two_decimals() {
        let stats = PlatformStats {
            avg_rating: 3.5349,
            ..PlatformStats::default()
        };
        assert_eq!(stats.formatted_avg_rating(), "3.53★");
    }

    #[test]
    fn fallback_exports_the_default_record() {
        let outcome = PlatformStatsOutcome::Fallback {
            stats: PlatformStats::default(),
            reason: "missing".to_owned(),
        };
        let table = outcome.export_table();
        assert_eq!(table.len(), 1);
        assert_eq!(
            PlatformStats::from_table(&table).unwrap(),
            PlatformStats::default()
        );
    }
}
