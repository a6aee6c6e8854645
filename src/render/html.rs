use anyhow::Result;
use log::{debug, warn};
use std::path::Path;

use super::Renderer;
use crate::package::PackageRecord;
use crate::runtime::Runtime;

pub const INDEX_FILE: &str = "index.html";

/// File name of the page for package `name`.
pub fn page_file_name(name: &str) -> String {
    format!("{}.html", name)
}

/// Whether `name` can become a file directly inside the output directory.
pub fn is_page_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.contains('\\')
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders `index.html` and one `<name>.html` per package.
pub struct HtmlRenderer<'a, R: Runtime> {
    runtime: &'a R,
}

impl<'a, R: Runtime> HtmlRenderer<'a, R> {
    pub fn new(runtime: &'a R) -> Self {
        Self { runtime }
    }
}

fn index_page<'r>(records: impl IntoIterator<Item = &'r PackageRecord>) -> String {
    let mut page = String::from("<!DOCTYPE html>\n<html>\n<p>Packages:</p>\n");
    for record in records {
        push_link(&mut page, &record.name);
    }
    page.push_str("</html>\n");
    page
}

fn package_page(record: &PackageRecord) -> String {
    let mut page = String::from("<!DOCTYPE html>\n<html>\n");
    page.push_str(&format!("<p>Package: {}</p>\n", escape_html(&record.name)));
    page.push_str("<p>Description:</p>\n");
    page.push_str(&format!("<p>{}</p>\n", escape_html(&record.description)));

    page.push_str("<p>Dependencies:</p>\n");
    for dep in &record.dependencies {
        push_link(&mut page, dep);
    }

    page.push_str("<p>Reverse-dependencies:</p>\n");
    for rdep in &record.reverse_dependencies {
        push_link(&mut page, rdep);
    }

    page.push_str("</html>\n");
    page
}

fn push_link(page: &mut String, name: &str) {
    let name = escape_html(name);
    page.push_str(&format!(
        "<a href=\"{}\">{}</a><br>\n",
        page_file_name(&name),
        name
    ));
}

impl<R: Runtime> Renderer for HtmlRenderer<'_, R> {
    #[tracing::instrument(skip(self, records))]
    fn render(&self, records: &[PackageRecord], out_dir: &Path) -> Result<usize> {
        // Names that would land outside out_dir (or nowhere) get no page
        let pages: Vec<&PackageRecord> = records
            .iter()
            .filter(|record| {
                let keep = is_page_name(&record.name);
                if !keep {
                    warn!("Skipping package with unusable name {:?}", record.name);
                }
                keep
            })
            .collect();

        let index = index_page(pages.iter().copied());
        self.runtime.write(&out_dir.join(INDEX_FILE), index.as_bytes())?;

        for record in &pages {
            let path = out_dir.join(page_file_name(&record.name));
            debug!("Writing {:?}", path);
            self.runtime.write(&path, package_page(record).as_bytes())?;
        }

        Ok(pages.len() + 1)
    }
}
