//! Curated copy shown in the "key insights" callouts and persona profiles.
//!
//! These figures are editorial: they are written by the analysts, not derived
//! from the summary tables. The built-in defaults can be replaced with a TOML
//! file passed via `--editorial`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InsightItem {
    pub label: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InsightCard {
    pub title: String,
    pub items: Vec<InsightItem>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PersonaProfile {
    pub icon: String,
    pub name: String,
    pub share: String,
    pub prefers: String,
    pub characteristics: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NoteCard {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Editorial {
    pub landing_insights: Vec<InsightCard>,
    pub user_behavior_insights: Vec<InsightCard>,
    pub content_insights: Vec<InsightCard>,
    pub personas: Vec<PersonaProfile>,
    pub persona_note: NoteCard,
}

impl Editorial {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read editorial file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse editorial file: {:?}", path))
    }
}

fn card(title: &str, items: &[(&str, Option<&str>)]) -> InsightCard {
    InsightCard {
        title: title.to_owned(),
        items: items
            .iter()
            .map(|(label, value)| InsightItem {
                label: (*label).to_owned(),
                value: value.map(str::to_owned),
            })
            .collect(),
    }
}

fn persona(
    icon: &str,
    name: &str,
    share: &str,
    prefers: &str,
    characteristics: &str,
) -> PersonaProfile {
    PersonaProfile {
        icon: icon.to_owned(),
        name: name.to_owned(),
        share: share.to_owned(),
        prefers: prefers.to_owned(),
        characteristics: characteristics.to_owned(),
    }
}

impl Default for Editorial {
    fn default() -> Self {
        Editorial {
            landing_insights: vec![
                card(
                    "👥 User Behavior",
                    &[
                        ("3 distinct user segments identified", None),
                        ("Peak activity: 8-10 PM weekdays", None),
                        ("28-year rating history analyzed", None),
                    ],
                ),
                card(
                    "🎬 Content Insights",
                    &[
                        ("Film-Noir highest rated genre (4.0★)", None),
                        ("IMAX format: +1.9% rating boost", None),
                        ("1940s golden age of cinema", None),
                        ("194 hidden gems discovered", None),
                    ],
                ),
                card(
                    "🎯 Recommendations",
                    &[
                        ("5 user personas identified", None),
                        ("ML models: 66% Precision@10", None),
                        ("Personalization opportunities", None),
                    ],
                ),
            ],
            user_behavior_insights: vec![
                card(
                    "User Segments",
                    &[
                        ("Harsh Raters", Some("8.5%")),
                        ("Neutral Raters", Some("73.2%")),
                        ("Generous Raters", Some("18.3%")),
                    ],
                ),
                card(
                    "Peak Activity",
                    &[
                        ("Time", Some("8-10 PM")),
                        ("Day", Some("Weekdays")),
                        ("Month", Some("October")),
                    ],
                ),
                card(
                    "Trends",
                    &[
                        ("28-year history", None),
                        ("Steady growth since 1995", None),
                        ("Peak: 2016-2018", None),
                    ],
                ),
            ],
            content_insights: vec![
                card(
                    "Top Genres",
                    &[
                        ("Film-Noir", Some("4.00★")),
                        ("Documentary", Some("3.95★")),
                        ("War", Some("3.93★")),
                    ],
                ),
                card(
                    "Golden Era",
                    &[
                        ("Best decade", Some("1940s")),
                        ("Peak rating", Some("3.85★")),
                        ("Classic cinema dominance", None),
                    ],
                ),
                card(
                    "Tag Insights",
                    &[
                        ("Positive tags", Some("2.2%")),
                        ("Neutral tags", Some("96.5%")),
                        ("Negative tags", Some("1.3%")),
                    ],
                ),
            ],
            personas: vec![
                persona(
                    "🎭",
                    "Drama Enthusiasts",
                    "27.0%",
                    "Drama, Romance, Thriller",
                    "Emotional, character-driven stories",
                ),
                persona(
                    "🎬",
                    "Mainstream Viewers",
                    "25.1%",
                    "Comedy, Drama, Action",
                    "Popular, accessible content",
                ),
                persona(
                    "🚀",
                    "Sci-Fi Fans",
                    "10.0%",
                    "Sci-Fi, Action, Fantasy",
                    "Speculative, futuristic themes",
                ),
                persona(
                    "🎨",
                    "Art House Lovers",
                    "28.4%",
                    "Documentary, Film-Noir, Independent",
                    "Intellectual, artistic films",
                ),
                persona(
                    "👨‍👩‍👧‍👦",
                    "Family Oriented",
                    "9.5%",
                    "Animation, Children, Comedy",
                    "All-ages, wholesome content",
                ),
            ],
            persona_note: NoteCard {
                title: "💡 Strategic Value".to_owned(),
                lines: vec![
                    "Enable persona-specific homepage experiences".to_owned(),
                    "Expected impact: 15-25% engagement increase".to_owned(),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_carry_the_curated_copy() {
        let editorial = Editorial::default();
        assert_eq!(editorial.landing_insights.len(), 3);
        assert_eq!(editorial.user_behavior_insights[0].items[1].label, "Neutral Raters");
        assert_eq!(
            editorial.user_behavior_insights[0].items[1].value.as_deref(),
            Some("73.2%")
        );
        assert_eq!(editorial.personas.len(), 5);
        assert_eq!(editorial.personas[3].name, "Art House Lovers");
    }

    #[test]
    fn file_overrides_only_the_sections_it_names() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[content_insights]]
title = "Top Genres"
items = [{{ label = "Western", value = "4.10★" }}, {{ label = "Curated by hand" }}]
"#
        )
        .unwrap();

        let editorial = Editorial::load(file.path()).unwrap();
        assert_eq!(editorial.content_insights.len(), 1);
        assert_eq!(editorial.content_insights[0].items[0].label, "Western");
        assert_eq!(editorial.content_insights[0].items[1].value, None);
        assert_eq!(editorial.personas, Editorial::default().personas);
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let result = Editorial::load(Path::new("/nonexistent/editorial.toml"));
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }
}
