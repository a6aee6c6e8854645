use super::record::PackageRecord;

/// Order records by name, byte-wise ascending.
pub fn sort_by_name(records: &mut [PackageRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name));
}
