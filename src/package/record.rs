use serde::Serialize;

/// One package stanza from the status database.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub description: String,
    /// Names of the packages this one depends on, version constraints removed.
    pub dependencies: Vec<String>,
    /// Names of the packages depending on this one. Only the linker fills this.
    pub reverse_dependencies: Vec<String>,
}

impl PackageRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Removes repeated dependency names, keeping the first occurrence of each.
    pub fn dedup_dependencies(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.dependencies.retain(|dep| seen.insert(dep.clone()));
    }
}
