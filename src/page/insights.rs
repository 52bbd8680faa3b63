use super::html::{
    columns, html_escape, intro, render_embed, render_image, render_insight_card,
    render_metrics, render_note_card, render_table, section_title, Metric, DIVIDER,
};
use super::layout::{footer, header, page_shell, NavPage};
use crate::cache::DashboardCache;
use crate::editorial::{Editorial, InsightCard, PersonaProfile};
use crate::summary::{BundleOutcome, Dataset, PlatformStats, SummaryBundle};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    UserBehavior,
    ContentPerformance,
    HiddenGems,
    UserPersonas,
    Export,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::UserBehavior,
        Tab::ContentPerformance,
        Tab::HiddenGems,
        Tab::UserPersonas,
        Tab::Export,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Tab::UserBehavior => "user-behavior",
            Tab::ContentPerformance => "content-performance",
            Tab::HiddenGems => "hidden-gems",
            Tab::UserPersonas => "user-personas",
            Tab::Export => "export",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::UserBehavior => "👥 User Behavior",
            Tab::ContentPerformance => "🎬 Content Performance",
            Tab::HiddenGems => "💎 Hidden Gems",
            Tab::UserPersonas => "🎭 User Personas",
            Tab::Export => "📥 Export Data",
        }
    }

    /// Unknown slugs select the first tab.
    pub fn from_slug(slug: Option<&str>) -> Tab {
        slug.and_then(|s| Tab::ALL.into_iter().find(|t| t.slug() == s))
            .unwrap_or_default()
    }
}

/// A pre-rendered chart and where it goes.
#[derive(Clone, Copy, Debug)]
pub struct Visualization {
    pub title: &'static str,
    pub path: &'static str,
    pub height: u32,
}

const fn viz(title: &'static str, path: &'static str, height: u32) -> Visualization {
    Visualization {
        title,
        path,
        height,
    }
}

pub const USER_OVERVIEW: Visualization =
    viz("📊 User Rating Distribution", "user_behavior/overview.html", 550);
pub const TEMPORAL_TRENDS: Visualization = viz(
    "📈 Rating Trends Over Time (1995-2023)",
    "user_behavior/temporal_trends.html",
    850,
);
pub const RETENTION: Visualization =
    viz("🔄 User Retention Analysis", "user_behavior/retention.html", 550);
pub const MONTHLY_PATTERNS: Visualization = viz(
    "📅 Monthly Activity Patterns",
    "user_behavior/monthly_patterns.html",
    550,
);
pub const HOURLY_PATTERNS: Visualization = viz(
    "🕐 Hourly Activity Patterns",
    "user_behavior/hourly_patterns.html",
    550,
);
pub const GENRE_PERFORMANCE: Visualization = viz(
    "🎭 Genre Performance Analysis",
    "content_performance/genre_performance.html",
    700,
);
pub const TAG_SENTIMENT: Visualization = viz(
    "🏷️ Tag Sentiment Analysis",
    "content_performance/tag_sentiment.html",
    550,
);
pub const RELEASE_YEAR_IMPACT: Visualization = viz(
    "📅 Release Year Impact Analysis",
    "content_performance/release_year_impact.html",
    900,
);
pub const POLARIZATION: Visualization = viz(
    "📊 Movie Polarization Analysis",
    "content_performance/polarization.html",
    650,
);
pub const GEMS_ANALYSIS: Visualization =
    viz("🏆 Top Hidden Gems", "hidden_gems/gems_analysis.html", 800);
pub const PERSONA_CLUSTERS: Visualization = viz(
    "🎨 User Persona Distribution",
    "user_personas/persona_clusters.html",
    800,
);

pub const TAG_WORDCLOUD_PATH: &str = "content_performance/tag_wordcloud.png";

pub const ALL_VISUALIZATIONS: [Visualization; 11] = [
    USER_OVERVIEW,
    TEMPORAL_TRENDS,
    RETENTION,
    MONTHLY_PATTERNS,
    HOURLY_PATTERNS,
    GENRE_PERFORMANCE,
    TAG_SENTIMENT,
    RELEASE_YEAR_IMPACT,
    POLARIZATION,
    GEMS_ANALYSIS,
    PERSONA_CLUSTERS,
];

/// Download buttons, in display order, split in two groups.
const EXPORT_GROUPS: [(&str, &[(Dataset, &str)]); 2] = [
    (
        "📊 Available Datasets",
        &[
            (Dataset::PlatformStats, "📈 Platform Statistics"),
            (Dataset::UserSegments, "👥 User Segments"),
            (Dataset::YearlyTrends, "📅 Yearly Trends"),
        ],
    ),
    (
        "🎬 Content Data",
        &[
            (Dataset::GenreStats, "🎭 Genre Statistics"),
            (Dataset::HiddenGems, "💎 Hidden Gems"),
            (Dataset::TopMovies, "🏆 Top Movies"),
        ],
    ),
];

fn visualization(cache: &DashboardCache, viz: &Visualization) -> String {
    format!(
        "{}{}",
        section_title(viz.title),
        render_embed(&cache.fragment(viz.path, viz.height))
    )
}

fn insight_cards(cards: &[InsightCard]) -> String {
    let cells: Vec<String> = cards
        .iter()
        .map(|card| render_insight_card(card, "h4"))
        .collect();
    format!("{}{}{}", DIVIDER, section_title("🎯 Key Insights"), columns(&cells))
}

fn user_behavior_panel(cache: &DashboardCache, editorial: &Editorial) -> String {
    [
        "<h2>👥 User Behavior Analysis</h2>".to_owned(),
        intro("Understanding user rating patterns, temporal trends, and engagement behaviors across our platform."),
        visualization(cache, &USER_OVERVIEW),
        DIVIDER.to_owned(),
        visualization(cache, &TEMPORAL_TRENDS),
        DIVIDER.to_owned(),
        visualization(cache, &RETENTION),
        DIVIDER.to_owned(),
        columns(&[
            visualization(cache, &MONTHLY_PATTERNS),
            visualization(cache, &HOURLY_PATTERNS),
        ]),
        insight_cards(&editorial.user_behavior_insights),
    ]
    .concat()
}

fn content_performance_panel(cache: &DashboardCache, editorial: &Editorial) -> String {
    let wordcloud = format!(
        "{}{}",
        section_title("☁️ Popular Movie Tags"),
        render_image(
            &cache.image(TAG_WORDCLOUD_PATH),
            "Popular movie tags",
            "Word cloud image not found."
        )
    );
    [
        "<h2>🎬 Content Performance &amp; Tag Analysis</h2>".to_owned(),
        intro("Analyzing genre performance, user-generated tags, and release year impact on ratings."),
        visualization(cache, &GENRE_PERFORMANCE),
        DIVIDER.to_owned(),
        columns(&[visualization(cache, &TAG_SENTIMENT), wordcloud]),
        DIVIDER.to_owned(),
        visualization(cache, &RELEASE_YEAR_IMPACT),
        DIVIDER.to_owned(),
        visualization(cache, &POLARIZATION),
        insight_cards(&editorial.content_insights),
    ]
    .concat()
}

fn hidden_gems_panel(cache: &DashboardCache, bundle: &SummaryBundle) -> String {
    let summary = bundle.hidden_gems_summary();
    let metrics = render_metrics(&[
        Metric::new("Total Hidden Gems", summary.total.to_string()),
        Metric::new(
            "Avg Rating",
            summary
                .mean_rating
                .map(|r| format!("{:.2}★", r))
                .unwrap_or_else(|| "n/a".to_owned()),
        ),
        Metric::new(
            "Avg Reviews",
            summary
                .mean_reviews
                .map(|r| format!("{:.0}", r))
                .unwrap_or_else(|| "n/a".to_owned()),
        ),
        Metric::new(
            "Top Genre",
            summary.top_genre.unwrap_or_else(|| "n/a".to_owned()),
        ),
    ]);

    [
        "<h2>💎 Hidden Gems Discovery</h2>".to_owned(),
        intro("High-quality movies (≥4.0★) with low visibility (10-100 ratings) - perfect for curation and promotion."),
        visualization(cache, &GEMS_ANALYSIS),
        DIVIDER.to_owned(),
        section_title("📋 Hidden Gems Database"),
        render_table(&bundle.hidden_gems_display()),
        DIVIDER.to_owned(),
        metrics,
    ]
    .concat()
}

fn persona_card(persona: &PersonaProfile) -> String {
    format!(
        "<div class=\"card\"><h4>{} {} ({})</h4><p>Prefers: {}</p><p>Characteristics: {}</p></div>",
        html_escape(&persona.icon),
        html_escape(&persona.name),
        html_escape(&persona.share),
        html_escape(&persona.prefers),
        html_escape(&persona.characteristics)
    )
}

fn user_personas_panel(cache: &DashboardCache, editorial: &Editorial) -> String {
    let split = editorial.personas.len().div_ceil(2);
    let (left, right) = editorial.personas.split_at(split);
    let left: String = left.iter().map(persona_card).collect();
    let right: String = right
        .iter()
        .map(persona_card)
        .chain(std::iter::once(render_note_card(&editorial.persona_note)))
        .collect();

    [
        "<h2>🎭 User Personas &amp; Segmentation</h2>".to_owned(),
        intro("K-Means clustering analysis revealing distinct user segments based on genre preferences."),
        visualization(cache, &PERSONA_CLUSTERS),
        DIVIDER.to_owned(),
        section_title("📊 Persona Profiles"),
        columns(&[left, right]),
    ]
    .concat()
}

fn export_panel() -> String {
    let groups: Vec<String> = EXPORT_GROUPS
        .iter()
        .map(|(title, datasets)| {
            let buttons: String = datasets
                .iter()
                .map(|(dataset, label)| {
                    let file_name = dataset.file_name();
                    format!(
                        "<a class=\"button wide\" href=\"/export/{file}\" download=\"{file}\">{label}</a>",
                        file = file_name,
                        label = html_escape(label)
                    )
                })
                .collect();
            format!("{}{}", section_title(title), buttons)
        })
        .collect();

    [
        "<h2>📥 Export &amp; Download Data</h2>".to_owned(),
        intro("Download summary data and insights for further analysis or reporting."),
        columns(&groups),
    ]
    .concat()
}

fn tab_bar(selected: Tab) -> String {
    let tabs: String = Tab::ALL
        .iter()
        .map(|tab| {
            let class = if *tab == selected { "tab active" } else { "tab" };
            format!(
                "<a class=\"{}\" href=\"/insights?tab={}\">{}</a>",
                class,
                tab.slug(),
                tab.label()
            )
        })
        .collect();
    format!("<nav class=\"tabs\">{}</nav>", tabs)
}

fn tab_panel(
    tab: Tab,
    cache: &DashboardCache,
    bundle: &SummaryBundle,
    editorial: &Editorial,
) -> String {
    let content = match tab {
        Tab::UserBehavior => user_behavior_panel(cache, editorial),
        Tab::ContentPerformance => content_performance_panel(cache, editorial),
        Tab::HiddenGems => hidden_gems_panel(cache, bundle),
        Tab::UserPersonas => user_personas_panel(cache, editorial),
        Tab::Export => export_panel(),
    };
    format!(
        "<section class=\"tab-panel\" id=\"{}\">{}</section>",
        tab.slug(),
        content
    )
}

fn summary_metrics(stats: &PlatformStats, bundle: &SummaryBundle) -> String {
    render_metrics(&[
        Metric::new("Total Ratings", stats.total_ratings.clone()),
        Metric::new("Active Users", stats.total_users.clone()),
        Metric::new("Movies", stats.total_movies.clone()),
        Metric::new("Avg Rating", stats.formatted_avg_rating()),
        Metric::new("Hidden Gems", bundle.hidden_gems_count().to_string()),
    ])
}

pub fn render_insights(cache: &DashboardCache, editorial: &Editorial, tab: Tab) -> String {
    let mut body = header(
        "📊 BUSINESS INSIGHTS & ANALYTICS",
        "Comprehensive Analysis of 33.8M Ratings | 331K Users | 86K Movies",
    );
    body.push_str(DIVIDER);

    let outcome = cache.bundle();
    match outcome {
        BundleOutcome::Loaded(bundle) => {
            body.push_str(&summary_metrics(cache.platform_stats().stats(), bundle));
            body.push_str(DIVIDER);
            body.push_str(&tab_bar(tab));
            body.push_str(&tab_panel(tab, cache, bundle, editorial));
        }
        BundleOutcome::NoData { .. } => {
            let message = outcome.error_message().unwrap_or_default();
            body.push_str(&format!(
                "<div class=\"error\">{}</div>",
                html_escape(&message)
            ));
        }
    }

    body.push_str(DIVIDER);
    body.push_str(&footer(&[
        "Business Insights Dashboard | MovieLens 33M Dataset Analysis",
        "Machine Learning Final Project | 2024",
    ]));

    page_shell("Business Insights | MovieLens Dashboard", NavPage::Insights, &body)
}
