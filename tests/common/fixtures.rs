//! Test fixture creation for the assets directory

use super::constants::*;
use anyhow::Result;
use movielens_dashboard::page::{ALL_VISUALIZATIONS, TAG_WORDCLOUD_PATH};
use movielens_dashboard::AssetsLayout;
use std::fmt::Write;
use std::fs;
use tempfile::TempDir;

/// PNG signature followed by the start of an IHDR chunk
const TEST_IMAGE_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
];

/// What to put in a test assets directory.
#[derive(Clone, Debug)]
pub struct AssetsFixture {
    pub platform_stats: bool,
    /// File name of a secondary dataset to leave out.
    pub omitted_dataset: Option<&'static str>,
    pub hidden_gems_rows: usize,
    pub visualizations: bool,
}

impl Default for AssetsFixture {
    fn default() -> Self {
        AssetsFixture {
            platform_stats: true,
            omitted_dataset: None,
            hidden_gems_rows: HIDDEN_GEMS_ROWS,
            visualizations: true,
        }
    }
}

impl AssetsFixture {
    pub fn without_platform_stats(mut self) -> Self {
        self.platform_stats = false;
        self
    }

    pub fn without_dataset(mut self, file_name: &'static str) -> Self {
        self.omitted_dataset = Some(file_name);
        self
    }

    pub fn without_visualizations(mut self) -> Self {
        self.visualizations = false;
        self
    }
}

/// Title of the n-th (1-based) hidden gem in the fixture
pub fn hidden_gem_title(n: usize) -> String {
    format!("Gem {:03}", n)
}

fn hidden_gems_csv(rows: usize) -> String {
    let mut csv = String::from("title,genres,release_year,avg_rating,num_ratings\n");
    for n in 1..=rows {
        let genres = if n <= HIDDEN_GEMS_SHOWN {
            format!("{}|Romance", LEADING_GENRE)
        } else {
            TRAILING_GENRE.to_owned()
        };
        let _ = writeln!(
            csv,
            "{},{},{},4.{},{}",
            hidden_gem_title(n),
            genres,
            1940 + n % 60,
            n % 10,
            10 + n % 90
        );
    }
    csv
}

fn secondary_datasets(hidden_gems_rows: usize) -> Vec<(&'static str, String)> {
    vec![
        (
            "user_segments.csv",
            "segment,share\nHarsh Raters,0.085\nNeutral Raters,0.732\nGenerous Raters,0.183\n"
                .to_owned(),
        ),
        (
            "yearly_trends.csv",
            "year,num_ratings,avg_rating\n1995,3,3.67\n2016,1200000,3.52\n".to_owned(),
        ),
        (
            "genre_stats.csv",
            "genre,avg_rating,num_ratings\nFilm-Noir,4.00,300000\n\"Drama, Indie\",3.61,5000\n"
                .to_owned(),
        ),
        ("hidden_gems.csv", hidden_gems_csv(hidden_gems_rows)),
        (
            "top_movies.csv",
            "title,avg_rating,num_ratings\nThe Shawshank Redemption (1994),4.42,122296\n"
                .to_owned(),
        ),
    ]
}

/// Creates a temporary assets directory laid out like the pipeline output.
pub fn create_test_assets(fixture: &AssetsFixture) -> Result<TempDir> {
    let dir = TempDir::new()?;
    let layout = AssetsLayout::new(dir.path());

    let summary_dir = layout.summary_dir();
    fs::create_dir_all(&summary_dir)?;

    if fixture.platform_stats {
        fs::write(
            summary_dir.join("platform_stats.csv"),
            format!(
                "total_ratings,total_users,total_movies,avg_rating\n{},{},{},{}\n",
                TOTAL_RATINGS, TOTAL_USERS, TOTAL_MOVIES, AVG_RATING
            ),
        )?;
    }

    for (file_name, content) in secondary_datasets(fixture.hidden_gems_rows) {
        if fixture.omitted_dataset != Some(file_name) {
            fs::write(summary_dir.join(file_name), content)?;
        }
    }

    let visualizations_dir = layout.visualizations_dir();
    fs::create_dir_all(&visualizations_dir)?;
    if fixture.visualizations {
        for viz in ALL_VISUALIZATIONS.iter() {
            let path = visualizations_dir.join(viz.path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(
                &path,
                format!("<div class=\"plotly\">{}</div>", viz.title),
            )?;
        }
        let wordcloud = visualizations_dir.join(TAG_WORDCLOUD_PATH);
        if let Some(parent) = wordcloud.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(wordcloud, TEST_IMAGE_BYTES)?;
    }

    Ok(dir)
}
