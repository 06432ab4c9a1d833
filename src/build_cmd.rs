//! One-shot site build: load the dataset, render every release page, then
//! render the index that links them.

use tracing::{debug, info, warn};

use crate::config::SiteConfig;
use crate::dataset::DatasetReader;
use crate::site::schema::page_file_name;
use crate::site::{write_index_html, write_page_html};
use crate::{VizError, VizResult};

/// Run the generator with the given configuration.
///
/// A dataset problem aborts before any output. A failed page write is
/// reported and the remaining files are still attempted; the run fails at
/// the end if anything could not be written. The index is rendered after
/// all pages because it depends on the full set of eligibility results.
pub fn run(config: &SiteConfig) -> VizResult<()> {
    let reader = DatasetReader::new(&config.data);
    let releases = reader.read_releases()?;
    info!("found {} release(s) in {}", releases.len(), config.data.display());

    let mut generated = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for release in &releases {
        let file_name = page_file_name(&release.name);
        match write_page_html(release, &config.title, &config.out.join(&file_name)) {
            Ok(true) => {
                info!("generated {file_name}");
                generated += 1;
            }
            Ok(false) => {
                debug!("skipping {}: no eligible players", release.name);
                skipped += 1;
            }
            Err(e) => {
                warn!("{e}");
                failed += 1;
            }
        }
    }

    write_index_html(&releases, &config.title, &config.out.join("index.html"))?;
    info!("generated index.html");

    info!("done: {generated} release page(s), {skipped} skipped, {failed} failed");

    if failed > 0 {
        return Err(VizError::Io(format!(
            "{failed} release page(s) could not be written"
        )));
    }
    Ok(())
}
