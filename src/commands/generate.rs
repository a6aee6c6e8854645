use anyhow::{Context, Result};
use log::{debug, info};

use crate::{
    package::{LinkSummary, PackageRecord, link_records, parse_records, sort_by_name},
    render::{HtmlRenderer, JsonRenderer, Renderer},
    runtime::Runtime,
};

use super::config::{Config, OutputFormat};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub links: LinkSummary,
    pub files_written: usize,
}

/// Parse, link, sort and render the package database described by `config`.
#[tracing::instrument(skip(runtime))]
pub fn generate<R: Runtime>(runtime: &R, config: &Config) -> Result<GenerateReport> {
    match config.format {
        OutputFormat::Html => run(runtime, &HtmlRenderer::new(runtime), config),
        OutputFormat::Json => run(runtime, &JsonRenderer::new(runtime), config),
    }
}

#[tracing::instrument(skip(runtime, renderer))]
pub fn run<R: Runtime, W: Renderer>(
    runtime: &R,
    renderer: &W,
    config: &Config,
) -> Result<GenerateReport> {
    let (links, records) = load_records(runtime, config)?;

    if !runtime.is_dir(&config.output_dir) {
        debug!("Creating output directory {:?}", config.output_dir);
        runtime.create_dir_all(&config.output_dir)?;
    }

    let files_written = renderer.render(&records, &config.output_dir)?;
    info!("Wrote {} file(s) to {:?}", files_written, config.output_dir);

    Ok(GenerateReport {
        links,
        files_written,
    })
}

/// Read the status database and return its records linked and sorted by name.
fn load_records<R: Runtime>(
    runtime: &R,
    config: &Config,
) -> Result<(LinkSummary, Vec<PackageRecord>)> {
    let mut records = {
        let reader = runtime
            .open(&config.status_path)
            .context("Could not open package database")?;
        parse_records(reader)?
    };

    let summary = link_records(&mut records);
    sort_by_name(&mut records);
    Ok((summary, records))
}
