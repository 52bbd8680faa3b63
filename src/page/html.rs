use std::fmt::Write;

use crate::editorial::{InsightCard, NoteCard};
use crate::embed::{Embed, ImageEmbed};
use crate::summary::Table;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub struct Metric<'a> {
    pub label: &'a str,
    pub value: String,
    pub delta: Option<&'a str>,
}

impl<'a> Metric<'a> {
    pub fn new(label: &'a str, value: impl Into<String>) -> Metric<'a> {
        Metric {
            label,
            value: value.into(),
            delta: None,
        }
    }

    pub fn with_delta(mut self, delta: &'a str) -> Metric<'a> {
        self.delta = Some(delta);
        self
    }
}

pub fn render_metrics(metrics: &[Metric]) -> String {
    let mut out = String::from("<div class=\"metrics\">");
    for metric in metrics {
        let _ = write!(
            out,
            r#"<div class="metric"><div class="metric-label">{}</div><div class="metric-value">{}</div>"#,
            html_escape(metric.label),
            html_escape(&metric.value)
        );
        if let Some(delta) = metric.delta {
            let _ = write!(out, r#"<div class="metric-delta">{}</div>"#, html_escape(delta));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

pub fn render_embed(embed: &Embed) -> String {
    match embed {
        Embed::Fragment { path, html, height } => format!(
            r#"<iframe class="viz" title="{path}" srcdoc="{html}" height="{height}" scrolling="no"></iframe>"#,
            path = html_escape(path),
            html = html_escape(html),
            height = height,
        ),
        Embed::Missing { path, reason } => format!(
            r#"<div class="warning">Could not load visualization: {} ({})</div>"#,
            html_escape(path),
            html_escape(reason)
        ),
    }
}

pub fn render_image(image: &ImageEmbed, alt: &str, missing_notice: &str) -> String {
    match image {
        ImageEmbed::Found { path } => format!(
            r#"<img class="viz-image" src="/visualizations/{}" alt="{}">"#,
            html_escape(path),
            html_escape(alt)
        ),
        ImageEmbed::Missing { .. } => format!(
            r#"<div class="warning">{}</div>"#,
            html_escape(missing_notice)
        ),
    }
}

pub fn render_insight_card(card: &InsightCard, heading: &str) -> String {
    let mut out = format!(
        "<div class=\"card insight\"><{heading}>{}</{heading}>",
        html_escape(&card.title)
    );
    for item in &card.items {
        match &item.value {
            Some(value) => {
                let _ = write!(
                    out,
                    "<p>• {}: <strong>{}</strong></p>",
                    html_escape(&item.label),
                    html_escape(value)
                );
            }
            None => {
                let _ = write!(out, "<p>• {}</p>", html_escape(&item.label));
            }
        }
    }
    out.push_str("</div>");
    out
}

pub fn render_note_card(note: &NoteCard) -> String {
    let mut out = format!("<div class=\"card\"><h4>{}</h4>", html_escape(&note.title));
    for line in &note.lines {
        let _ = write!(out, "<p>{}</p>", html_escape(line));
    }
    out.push_str("</div>");
    out
}

pub fn columns(cells: &[String]) -> String {
    let mut out = format!("<div class=\"columns columns-{}\">", cells.len());
    for cell in cells {
        let _ = write!(out, "<div class=\"column\">{}</div>", cell);
    }
    out.push_str("</div>");
    out
}

pub fn render_table(table: &Table) -> String {
    let mut out = String::from("<div class=\"table-wrap\"><table class=\"data\"><thead><tr>");
    for header in table.headers() {
        let _ = write!(out, "<th>{}</th>", html_escape(header));
    }
    out.push_str("</tr></thead><tbody>");
    for row in table.rows() {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", html_escape(cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></div>");
    out
}

pub fn section_title(title: &str) -> String {
    format!("<h3>{}</h3>", html_escape(title))
}

pub fn intro(text: &str) -> String {
    format!("<div class=\"intro\"><p>{}</p></div>", html_escape(text))
}

pub const DIVIDER: &str = "<hr>";
