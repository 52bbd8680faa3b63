use serde::Deserialize;
use std::collections::HashMap;

use super::{LoadError, Table};

/// Maximum number of rows shown in the hidden gems table.
pub const HIDDEN_GEMS_DISPLAY_LIMIT: usize = 50;

const GENRE_DELIMITER: char = '|';

pub(super) const HIDDEN_GEMS_COLUMNS: [&str; 5] =
    ["title", "genres", "release_year", "avg_rating", "num_ratings"];

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HiddenGem {
    pub title: String,
    pub genres: String,
    pub release_year: String,
    /// Blank cells load as `None`.
    pub avg_rating: Option<f64>,
    pub num_ratings: Option<f64>,
}

impl HiddenGem {
    pub fn genre_tokens(&self) -> impl Iterator<Item = &str> {
        self.genres
            .split(GENRE_DELIMITER)
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }

    pub(super) fn parse_table(table: &Table) -> Result<Vec<HiddenGem>, LoadError> {
        let missing: Vec<&str> = HIDDEN_GEMS_COLUMNS
            .iter()
            .copied()
            .filter(|c| table.column_index(c).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::Schema(format!(
                "hidden gems table is missing columns: {}",
                missing.join(", ")
            )));
        }
        table.deserialize_rows()
    }
}

/// Aggregates shown under the hidden gems table, computed over every row.
/// Means skip blank cells; `total` counts every row.
#[derive(Clone, Debug, PartialEq)]
pub struct HiddenGemsSummary {
    pub total: usize,
    pub mean_rating: Option<f64>,
    pub mean_reviews: Option<f64>,
    pub top_genre: Option<String>,
}

impl HiddenGemsSummary {
    pub fn from_gems(gems: &[HiddenGem]) -> HiddenGemsSummary {
        let mean = |value: fn(&HiddenGem) -> Option<f64>| {
            let values: Vec<f64> = gems.iter().filter_map(value).collect();
            if values.is_empty() {
                None
            } else {
                Some(values.iter().sum::<f64>() / values.len() as f64)
            }
        };

        HiddenGemsSummary {
            total: gems.len(),
            mean_rating: mean(|g| g.avg_rating),
            mean_reviews: mean(|g| g.num_ratings),
            top_genre: most_frequent_genre(gems),
        }
    }
}

/// Most frequent genre token across all rows. Ties go to the token seen first.
fn most_frequent_genre(gems: &[HiddenGem]) -> Option<String> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut order = 0;
    for genre in gems.iter().flat_map(HiddenGem::genre_tokens) {
        let entry = counts.entry(genre).or_insert((0, order));
        entry.0 += 1;
        order += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(genre, _)| genre.to_owned())
}

/// The displayed slice: the first rows in source order, restricted to the
/// hidden gems columns.
pub(super) fn display_table(table: &Table) -> Table {
    let indices: Vec<usize> = HIDDEN_GEMS_COLUMNS
        .iter()
        .filter_map(|c| table.column_index(c))
        .collect();
    let headers = indices
        .iter()
        .map(|&i| table.headers()[i].clone())
        .collect();
    let rows = table
        .rows()
        .iter()
        .take(HIDDEN_GEMS_DISPLAY_LIMIT)
        .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
        .collect();
    Table::new(headers, rows)
}
