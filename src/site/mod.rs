//! Static site rendering.
//!
//! One standalone scatter-plot page per release plus a navigation index.
//! Rendering is pure; `write_document` is the only side-effecting sink.

use std::fs;
use std::path::Path;

use crate::{VizError, VizResult};

pub mod build;
pub mod index;
pub mod page;
pub mod schema;

pub use build::build_index_entries;
pub use index::{render_index_html, write_index_html};
pub use page::{html_escape, render_page_html, write_page_html};
pub use schema::{IndexEntry, page_file_name};

/// Persist a rendered document, creating the parent directory as needed.
///
/// Overwrites unconditionally. Content is written as UTF-8.
pub fn write_document(path: &Path, content: &str) -> VizResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                VizError::Io(format!("failed to create directory {}: {e}", parent.display()))
            })?;
        }
    }

    fs::write(path, content)
        .map_err(|e| VizError::Io(format!("failed to write {}: {e}", path.display())))
}
