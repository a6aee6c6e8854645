//! Dependency linking: dedup each record's dependencies and derive the
//! reverse-dependency relation over the whole collection.

use log::{debug, info};
use std::collections::HashMap;

use super::record::PackageRecord;

/// Counts gathered while linking, for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkSummary {
    pub records: usize,
    /// Reverse-dependency entries created.
    pub edges: usize,
    /// Dependency names with no matching record.
    pub dangling: usize,
}

/// Link `records` in place.
///
/// Reverse dependencies are appended in collection order, so each list
/// follows the order the depending records appear in `records`. A package
/// depending on itself is listed among its own reverse dependencies.
#[tracing::instrument(skip(records))]
pub fn link_records(records: &mut [PackageRecord]) -> LinkSummary {
    for record in records.iter_mut() {
        record.dedup_dependencies();
    }

    let mut positions: HashMap<&str, Vec<usize>> = HashMap::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        positions.entry(record.name.as_str()).or_default().push(index);
    }

    let mut summary = LinkSummary {
        records: records.len(),
        ..Default::default()
    };
    let mut reverse: Vec<Vec<String>> = vec![Vec::new(); records.len()];
    for record in records.iter() {
        for dep in &record.dependencies {
            match positions.get(dep.as_str()) {
                Some(targets) => {
                    for &target in targets {
                        reverse[target].push(record.name.clone());
                        summary.edges += 1;
                    }
                }
                None => {
                    debug!("{} depends on {}, which is not installed", record.name, dep);
                    summary.dangling += 1;
                }
            }
        }
    }

    for (record, rdeps) in records.iter_mut().zip(reverse) {
        record.reverse_dependencies.extend(rdeps);
    }

    info!(
        "Linked {} record(s): {} reverse dependencies, {} dangling reference(s)",
        summary.records, summary.edges, summary.dangling
    );
    summary
}
