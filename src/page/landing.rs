use super::html::{columns, render_insight_card, render_metrics, Metric, DIVIDER};
use super::layout::{footer, header, page_shell, NavPage};
use crate::editorial::Editorial;
use crate::summary::PlatformStats;

const PROJECT_OVERVIEW: &str = r#"<div class="card">
<h3>Business Context</h3>
<p>As Data Scientists for a leading streaming platform, we analyzed <strong>33.8 million ratings</strong>
from <strong>331,000 users</strong> across <strong>86,000 movies</strong> to extract actionable insights
for content strategy, user engagement, and personalized recommendations.</p>
</div>"#;

const SECTIONS: [(&str, &[&str]); 4] = [
    (
        "👥 User Behavior",
        &["Rating patterns", "Temporal trends", "User retention"],
    ),
    (
        "🎬 Content Performance",
        &["Genre analysis", "Tag sentiment", "Release year impact"],
    ),
    ("💎 Hidden Gems", &["Underrated movies", "Quality vs popularity"]),
    ("🎭 User Personas", &["Genre preferences", "Clustering analysis"]),
];

fn navigation_panel() -> String {
    let mut out = String::from("<div class=\"card\"><h3>Dashboard Sections</h3><ul>");
    for (section, topics) in SECTIONS {
        out.push_str(&format!("<li><strong>{}</strong><ul>", section));
        for topic in topics {
            out.push_str(&format!("<li>{}</li>", topic));
        }
        out.push_str("</ul></li>");
    }
    out.push_str("</ul></div>");
    out
}

pub fn render_landing(stats: &PlatformStats, editorial: &Editorial) -> String {
    let metrics = render_metrics(&[
        Metric::new("Total Ratings", stats.total_ratings.clone()).with_delta("33.8M analyzed"),
        Metric::new("Active Users", stats.total_users.clone()).with_delta("331K profiles"),
        Metric::new("Movies Analyzed", stats.total_movies.clone()).with_delta("86K titles"),
        Metric::new("Avg Rating", stats.formatted_avg_rating()).with_delta("Quality content"),
    ]);

    let insights: Vec<String> = editorial
        .landing_insights
        .iter()
        .map(|card| render_insight_card(card, "h3"))
        .collect();

    let body = [
        header(
            "🎬 MOVIELENS ANALYTICS DASHBOARD",
            "Powered by 33M+ Ratings | Machine Learning Final Project",
        ),
        DIVIDER.to_owned(),
        "<h2 class=\"centered\">PLATFORM OVERVIEW</h2>".to_owned(),
        metrics,
        DIVIDER.to_owned(),
        format!(
            "<div class=\"columns columns-2-1\"><div class=\"column\"><h2>PROJECT OVERVIEW</h2>{}</div><div class=\"column\"><h2>NAVIGATION</h2>{}</div></div>",
            PROJECT_OVERVIEW,
            navigation_panel()
        ),
        DIVIDER.to_owned(),
        "<h2 class=\"centered\">KEY INSIGHTS</h2>".to_owned(),
        columns(&insights),
        DIVIDER.to_owned(),
        "<h2 class=\"centered\">🚀 EXPLORE THE DASHBOARD</h2>".to_owned(),
        r#"<div class="columns"><div class="column"></div><div class="column" style="flex: 2; text-align: center;">
<p>Open <strong>Business Insights</strong> to explore comprehensive visualizations and analytics.</p>
<a class="button wide" href="/insights">Go to Business Insights</a>
</div><div class="column"></div></div>"#
            .to_owned(),
        DIVIDER.to_owned(),
        footer(&["Built with Rust • axum • csv • tracing"]),
    ]
    .concat();

    page_shell("MovieLens Analytics Dashboard", NavPage::Home, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_show_platform_stats() {
        let html = render_landing(&PlatformStats::default(), &Editorial::default());
        for value in ["33.8M", "331K", "86K", "3.53★"] {
            assert!(
                html.contains(&format!("<div class=\"metric-value\">{}</div>", value)),
                "missing metric {}",
                value
            );
        }
    }

    #[test]
    fn links_to_the_insights_page() {
        let html = render_landing(&PlatformStats::default(), &Editorial::default());
        assert!(html.contains(r#"href="/insights""#));
        assert!(html.contains("Go to Business Insights"));
        assert!(html.contains(r#"<a class="nav-link active" href="/" aria-current="page">Home</a>"#));
        assert!(html.contains("<h1>🎬 MOVIELENS ANALYTICS DASHBOARD</h1>"));
    }

    #[test]
    fn insight_cards_come_from_editorial_content() {
        let mut editorial = Editorial::default();
        editorial.landing_insights[0].title = "Audience".to_owned();
        let html = render_landing(&PlatformStats::default(), &editorial);
        assert!(html.contains("<h3>Audience</h3>"));
        assert!(!html.contains("<h3>👥 User Behavior</h3>"));
    }
}
