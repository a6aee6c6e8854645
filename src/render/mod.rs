//! Output renderers for linked package records.
//!
//! - `html` - index page plus one page per package
//! - `json` - a single machine-readable dump

mod html;
mod json;

use anyhow::Result;
use std::path::Path;

use crate::package::PackageRecord;

pub use html::{HtmlRenderer, escape_html, is_page_name, page_file_name};
pub use json::JsonRenderer;

#[cfg_attr(test, mockall::automock)]
pub trait Renderer {
    /// Write the output for `records` (already linked and sorted) into `out_dir`.
    /// Returns the number of files written. Packages whose names cannot be
    /// used as file names are left out.
    fn render(&self, records: &[PackageRecord], out_dir: &Path) -> Result<usize>;
}
