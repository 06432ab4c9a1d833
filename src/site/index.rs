//! Navigation index page generator.
//!
//! A single document with a release dropdown driving an embedded iframe.
//! The first release in sort order is pre-selected and pre-loaded; releases
//! with no eligible players get neither an option nor a page.

use std::path::Path;

use crate::VizResult;
use crate::core::schema::Release;

use super::build::build_index_entries;
use super::page::html_escape;
use super::schema::IndexEntry;
use super::write_document;

/// Static note describing the eligibility rule applied to every release.
const ELIGIBILITY_NOTE: &str = "Only players who debuted with WAR > 0 are displayed";

fn render_options(entries: &[IndexEntry]) -> String {
    let mut options = String::new();
    for entry in entries {
        options.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            html_escape(&entry.file_name),
            html_escape(&entry.name)
        ));
    }
    options
}

/// Render the navigation index over the full release collection.
///
/// Eligibility is recomputed per release; the reported total counts only
/// releases that survived. Renders without error when nothing survives
/// (empty selector, empty frame, count of zero).
pub fn render_index_html(releases: &[Release], site_title: &str) -> String {
    let entries = build_index_entries(releases);
    let options = render_options(&entries);
    let initial_file = entries.first().map(|e| e.file_name.as_str()).unwrap_or("");

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{site_title} | Career WAR Visualizations</title>
<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/css/bootstrap.min.css" rel="stylesheet">
<link rel="preconnect" href="https://fonts.googleapis.com">
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
<link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">
<style>
* {{ box-sizing: border-box; }}
body {{
  font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  background: linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%);
  min-height: 100vh;
  margin: 0;
  padding: 0;
}}
.main-container {{
  max-width: 1600px;
  margin: 40px auto;
  background-color: #ffffff;
  border-radius: 12px;
  box-shadow: 0 10px 40px rgba(0,0,0,0.1);
  overflow: hidden;
}}
.header {{
  background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
  color: white;
  padding: 50px 40px;
  border-bottom: 4px solid #ffd700;
}}
.header h1 {{ margin: 0 0 12px 0; font-size: 2.75rem; font-weight: 700; letter-spacing: -0.5px; }}
.header .subtitle {{ margin: 0; font-size: 1.1rem; opacity: 0.95; font-weight: 400; }}
.controls-section {{ padding: 30px 40px; background-color: #f8f9fa; border-bottom: 1px solid #e9ecef; }}
.release-selector {{ display: flex; align-items: center; gap: 15px; }}
.release-selector label {{ font-weight: 600; color: #495057; margin: 0; font-size: 1rem; }}
.release-selector select {{
  flex: 1;
  max-width: 500px;
  padding: 12px 16px;
  border: 2px solid #dee2e6;
  border-radius: 8px;
  font-size: 1rem;
  font-weight: 500;
  background-color: white;
  color: #212529;
  cursor: pointer;
}}
.release-selector select:focus {{ outline: none; border-color: #2a5298; }}
.visualization-container {{ position: relative; min-height: 700px; background-color: #ffffff; }}
.visualization-container iframe {{ width: 100%; height: 800px; border: none; display: block; }}
.stats-summary {{
  padding: 25px 40px;
  background-color: #f8f9fa;
  border-top: 1px solid #e9ecef;
  display: flex;
  justify-content: space-between;
  align-items: center;
  flex-wrap: wrap;
  gap: 20px;
}}
.stats-summary .stat-label {{
  font-weight: 600;
  color: #6c757d;
  font-size: 0.9rem;
  text-transform: uppercase;
  letter-spacing: 0.5px;
}}
.stats-summary .stat-value {{ font-weight: 700; color: #2a5298; font-size: 1.1rem; }}
.stats-summary .note {{ color: #6c757d; font-size: 0.9rem; font-style: italic; }}
@media (max-width: 768px) {{
  .main-container {{ margin: 20px; border-radius: 8px; }}
  .header {{ padding: 30px 20px; }}
  .header h1 {{ font-size: 2rem; }}
  .controls-section {{ padding: 20px; }}
  .release-selector {{ flex-direction: column; align-items: stretch; }}
  .release-selector select {{ max-width: 100%; }}
  .stats-summary {{ padding: 20px; flex-direction: column; align-items: flex-start; }}
}}
</style>
</head>
<body>
<div class="main-container">
<div class="header">
<h1>{site_title}</h1>
<p class="subtitle">Career WAR vs Career Length Visualizations</p>
</div>
<div class="controls-section">
<div class="release-selector">
<label for="releaseSelect">Select Release:</label>
<select id="releaseSelect" class="form-select">
{options}</select>
</div>
</div>
<div class="visualization-container">
<iframe id="visualizationFrame" src="{initial_file}"></iframe>
</div>
<div class="stats-summary">
<div class="stat-item">
<span class="stat-label">Total Releases:</span>
<span class="stat-value">{release_count}</span>
</div>
<div class="note">{note}</div>
</div>
</div>
<script src="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/js/bootstrap.bundle.min.js"></script>
<script>
document.getElementById('releaseSelect').addEventListener('change', function (e) {{
  document.getElementById('visualizationFrame').src = e.target.value;
}});
</script>
</body>
</html>"##,
        site_title = html_escape(site_title),
        options = options,
        initial_file = html_escape(initial_file),
        release_count = entries.len(),
        note = ELIGIBILITY_NOTE,
    )
}

/// Render and write the navigation index.
pub fn write_index_html(
    releases: &[Release],
    site_title: &str,
    output_path: &Path,
) -> VizResult<()> {
    let html = render_index_html(releases, site_title);
    write_document(output_path, &html)
}
