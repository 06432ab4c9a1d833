//! Derived index entries and output file naming.
//!
//! These are derived views over `Release` used by the navigation page; the
//! dataset itself stays untouched.

use crate::core::schema::Release;
use crate::filter::eligible;

/// One selectable release on the navigation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: String,
    pub year: i32,
    pub set: String,
    /// Number of players that survived the eligibility filter.
    pub players_shown: usize,
    /// File name of the matching release page (e.g. "2021_bowman.html").
    pub file_name: String,
}

impl IndexEntry {
    /// Derive the entry for a release, or `None` when no player survives
    /// the eligibility filter. Releases without an entry get neither a
    /// page nor a dropdown option.
    pub fn from_release(release: &Release) -> Option<Self> {
        let players_shown = eligible(&release.players).len();
        if players_shown == 0 {
            return None;
        }
        Some(IndexEntry {
            name: release.name.clone(),
            year: release.year,
            set: release.set.clone(),
            players_shown,
            file_name: page_file_name(&release.name),
        })
    }
}

/// Derive the output file name for a release.
///
/// Lower-cased, spaces become underscores, a literal "&" becomes "and",
/// then ".html". Deterministic; assumed injective across the dataset.
pub fn page_file_name(release_name: &str) -> String {
    let mut name = release_name
        .to_lowercase()
        .replace(' ', "_")
        .replace('&', "and");
    name.push_str(".html");
    name
}
