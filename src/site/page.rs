//! Per-release scatter page generator.
//!
//! Each page is a standalone HTML document: a Plotly scatter of career WAR
//! against career length for the eligible players, plus a summary panel.
//! Chart and font assets are referenced by CDN URL and load only when a
//! browser opens the page; nothing is fetched at generation time.
//! All user-controlled strings are HTML-escaped for XSS safety.

use std::path::Path;

use crate::VizResult;
use crate::core::schema::{Player, Release};
use crate::filter::eligible;

use super::write_document;

/// HTML-escape a string for safe insertion into HTML content.
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape serialized JSON for embedding inside an HTML `<script>` element.
///
/// `<` becomes `\u003c`, which prevents a `</script>` sequence in player
/// names from terminating the element while remaining valid JSON.
fn escape_json_for_script(json: &str) -> String {
    json.replace('<', "\\u003c")
}

/// Summary aggregates over the eligible subset of one release.
#[derive(Debug, Clone, PartialEq)]
pub struct PageStats {
    pub players_shown: usize,
    pub avg_war: f64,
    pub avg_career_length: f64,
}

impl PageStats {
    /// Arithmetic means over exactly the eligible players, or `None` for an
    /// empty subset. An eligible player with no recorded career length
    /// contributes 0.0 years.
    pub fn from_eligible(players: &[&Player]) -> Option<Self> {
        if players.is_empty() {
            return None;
        }
        let n = players.len() as f64;
        let war_sum: f64 = players.iter().filter_map(|p| p.war).sum();
        let length_sum: f64 = players
            .iter()
            .map(|p| p.career_length.unwrap_or(0.0))
            .sum();
        Some(PageStats {
            players_shown: players.len(),
            avg_war: war_sum / n,
            avg_career_length: length_sum / n,
        })
    }
}

/// Render the scatter page for one release as a standalone HTML string.
///
/// Returns `None` when no player survives the eligibility filter; the
/// caller skips writing in that case. This is a normal outcome, not an
/// error.
pub fn render_page_html(release: &Release, site_title: &str) -> Option<String> {
    let players = eligible(&release.players);
    let stats = PageStats::from_eligible(&players)?;

    let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
    let wars: Vec<f64> = players.iter().filter_map(|p| p.war).collect();
    let lengths: Vec<f64> = players
        .iter()
        .map(|p| p.career_length.unwrap_or(0.0))
        .collect();

    let names_json =
        escape_json_for_script(&serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string()));
    let wars_json = serde_json::to_string(&wars).unwrap_or_else(|_| "[]".to_string());
    let lengths_json = serde_json::to_string(&lengths).unwrap_or_else(|_| "[]".to_string());

    Some(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{release_name} | {site_title}</title>
<script src="https://cdn.plot.ly/plotly-latest.min.js"></script>
<link rel="preconnect" href="https://fonts.googleapis.com">
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
<link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">
<style>
* {{ box-sizing: border-box; }}
body {{
  font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  margin: 0;
  padding: 0;
  background-color: #ffffff;
}}
.container {{ max-width: 1400px; margin: 0 auto; padding: 40px 30px; }}
.header-section {{ margin-bottom: 30px; padding-bottom: 20px; border-bottom: 2px solid #e9ecef; }}
h1 {{ color: #1e3c72; margin: 0 0 8px 0; font-size: 2rem; font-weight: 700; letter-spacing: -0.3px; }}
.subtitle {{ color: #6c757d; margin: 0; font-size: 1rem; font-weight: 400; }}
#plot {{ width: 100%; height: 650px; margin: 30px 0; }}
.stats {{
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 20px;
  padding: 25px;
  background: #f8f9fa;
  border-radius: 8px;
}}
.stat-item {{ text-align: center; }}
.stat-label {{
  display: block;
  font-size: 0.85rem;
  color: #6c757d;
  text-transform: uppercase;
  letter-spacing: 0.5px;
  font-weight: 600;
  margin-bottom: 8px;
}}
.stat-value {{ display: block; font-size: 1.75rem; color: #1e3c72; font-weight: 700; }}
@media (max-width: 768px) {{
  .container {{ padding: 20px 15px; }}
  h1 {{ font-size: 1.5rem; }}
  #plot {{ height: 500px; }}
  .stats {{ grid-template-columns: 1fr; padding: 20px; }}
}}
</style>
</head>
<body>
<div class="container">
<div class="header-section">
<h1>{release_name}</h1>
<p class="subtitle">Career WAR vs Career Length Analysis</p>
</div>
<div id="plot"></div>
<div class="stats">
<div class="stat-item"><span class="stat-label">Players Shown</span><span class="stat-value">{players_shown}</span></div>
<div class="stat-item"><span class="stat-label">Average WAR</span><span class="stat-value">{avg_war}</span></div>
<div class="stat-item"><span class="stat-label">Avg Career Length</span><span class="stat-value">{avg_career_length} yrs</span></div>
</div>
</div>
<script>
var data = [{{
  x: {wars_json},
  y: {lengths_json},
  mode: 'markers+text',
  type: 'scatter',
  text: {names_json},
  textposition: 'top center',
  textfont: {{ size: 10, color: '#333' }},
  marker: {{ size: 10, color: '#2a5298', opacity: 0.8, line: {{ width: 2, color: '#ffffff' }} }},
  hovertemplate: '<b>%{{text}}</b><br>Career WAR: %{{x}}<br>Career Length: %{{y}} years<extra></extra>'
}}];

var layout = {{
  xaxis: {{
    title: {{ text: 'Career WAR', font: {{ size: 16, family: 'Inter, sans-serif', color: '#1e3c72' }} }},
    showgrid: true,
    gridcolor: '#e9ecef',
    zeroline: false,
    linecolor: '#dee2e6'
  }},
  yaxis: {{
    title: {{ text: 'Career Length (years)', font: {{ size: 16, family: 'Inter, sans-serif', color: '#1e3c72' }} }},
    showgrid: true,
    gridcolor: '#e9ecef',
    zeroline: false,
    linecolor: '#dee2e6'
  }},
  plot_bgcolor: '#ffffff',
  paper_bgcolor: '#ffffff',
  hovermode: 'closest',
  margin: {{ l: 80, r: 40, t: 20, b: 60 }},
  font: {{ family: 'Inter, sans-serif', size: 12, color: '#495057' }}
}};

Plotly.newPlot('plot', data, layout, {{ responsive: true, displayModeBar: true }});
</script>
</body>
</html>"##,
        release_name = html_escape(&release.name),
        site_title = html_escape(site_title),
        players_shown = stats.players_shown,
        avg_war = format!("{:.2}", stats.avg_war),
        avg_career_length = format!("{:.1}", stats.avg_career_length),
        wars_json = wars_json,
        lengths_json = lengths_json,
        names_json = names_json,
    ))
}

/// Render and write the page for one release.
///
/// Returns `Ok(false)` when the release has no eligible players and no
/// document was produced.
pub fn write_page_html(
    release: &Release,
    site_title: &str,
    output_path: &Path,
) -> VizResult<bool> {
    match render_page_html(release, site_title) {
        Some(html) => {
            write_document(output_path, &html)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
