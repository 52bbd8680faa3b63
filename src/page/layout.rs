use super::html::html_escape;

const STYLESHEET: &str = r#"
body { background-color: #141414; color: #FFFFFF; font-family: 'Helvetica Neue', Arial, sans-serif; margin: 0; }
main { max-width: 1400px; margin: 0 auto; padding: 0 2rem; }
h1, h2, h3, h4 { color: #FFFFFF; }
h1 { color: #E50914; font-weight: 700; text-transform: uppercase; letter-spacing: 2px; margin-bottom: 0.5rem; }
h2.centered { text-align: center; margin-top: 2rem; }
hr { border: none; border-top: 1px solid #E50914; opacity: 0.3; margin: 2rem 0; }
a { color: #E50914; text-decoration: none; }
a:hover { color: #F40612; text-decoration: underline; }
.header { text-align: center; padding: 2rem 0; }
.header h1 { font-size: 3.2rem; }
.header p { font-size: 1.2rem; color: #999; margin-top: 0; }
.metrics { display: flex; gap: 1rem; justify-content: space-between; }
.metric { flex: 1; padding: 1rem; }
.metric-label { color: #FFFFFF; font-size: 0.95rem; }
.metric-value { color: #E50914; font-size: 2rem; font-weight: 700; }
.metric-delta { color: #3dd56d; font-size: 0.85rem; }
.columns { display: flex; gap: 1.5rem; }
.column { flex: 1; min-width: 0; }
.columns-2-1 > .column:first-child { flex: 2; }
.card { background-color: #1a1a1a; padding: 1.5rem; border-radius: 8px; border: 1px solid #333; margin-bottom: 1rem; }
.card.insight { border-left: 4px solid #E50914; min-height: 160px; }
.intro { background-color: #1a1a1a; padding: 1rem; border-radius: 8px; margin-bottom: 2rem; font-size: 1.05rem; }
.warning { background-color: #3a2f0b; color: #ffd966; border: 1px solid #7a6210; border-radius: 6px; padding: 0.75rem 1rem; margin: 0.5rem 0; }
.error { background-color: #3b0d0d; color: #ff8080; border: 1px solid #a33; border-radius: 6px; padding: 1rem; margin: 1rem 0; }
.button { display: inline-block; background-color: #E50914; color: white; border-radius: 4px; padding: 10px 24px; font-weight: 600; margin: 0.4rem 0; }
.button:hover { background-color: #F40612; color: white; text-decoration: none; }
.button.wide { display: block; text-align: center; }
.tabs { display: flex; background-color: #1a1a1a; border-radius: 8px 8px 0 0; }
.tab { color: #999; padding: 1rem 2rem; font-weight: 600; }
.tab.active { color: #E50914; border-bottom: 3px solid #E50914; }
.tab-panel { padding: 2rem 1rem; }
iframe.viz { width: 100%; border: none; display: block; }
img.viz-image { width: 100%; }
.table-wrap { max-height: 400px; overflow-y: auto; }
table.data { width: 100%; border-collapse: collapse; }
table.data th, table.data td { border-bottom: 1px solid #333; padding: 0.4rem 0.6rem; text-align: left; }
.site-nav { display: flex; gap: 1.5rem; padding: 1rem 0; border-bottom: 1px solid #333; }
.nav-link { color: #999; font-weight: 600; }
.nav-link.active { color: #E50914; }
.footer { text-align: center; padding: 2rem; color: #666; }
.footer p { color: #666; }
"#;

/// Pages reachable from the navigation strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPage {
    Home,
    Insights,
}

impl NavPage {
    pub const ALL: [NavPage; 2] = [NavPage::Home, NavPage::Insights];

    pub fn href(&self) -> &'static str {
        match self {
            NavPage::Home => "/",
            NavPage::Insights => "/insights",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavPage::Home => "Home",
            NavPage::Insights => "Business Insights",
        }
    }
}

fn nav_strip(current: NavPage) -> String {
    let links: String = NavPage::ALL
        .iter()
        .map(|page| {
            let (class, aria) = if *page == current {
                ("nav-link active", " aria-current=\"page\"")
            } else {
                ("nav-link", "")
            };
            format!(
                r#"<a class="{}" href="{}"{}>{}</a>"#,
                class,
                page.href(),
                aria,
                page.label()
            )
        })
        .collect();
    format!(r#"<nav class="site-nav">{}</nav>"#, links)
}

/// Wraps a page body with the shared document shell, theme and navigation.
pub fn page_shell(title: &str, current: NavPage, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
<main>
{nav}
{body}
</main>
</body>
</html>"#,
        title = html_escape(title),
        css = STYLESHEET,
        nav = nav_strip(current),
        body = body,
    )
}

pub fn header(title: &str, subtitle: &str) -> String {
    format!(
        r#"<div class="header"><h1>{}</h1><p>{}</p></div>"#,
        html_escape(title),
        html_escape(subtitle)
    )
}

pub fn footer(lines: &[&str]) -> String {
    let body: String = lines
        .iter()
        .map(|line| format!("<p>{}</p>", html_escape(line)))
        .collect();
    format!(r#"<div class="footer">{}</div>"#, body)
}
