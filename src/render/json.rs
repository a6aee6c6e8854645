use anyhow::{Context, Result};
use std::path::Path;

use super::Renderer;
use crate::package::PackageRecord;
use crate::runtime::Runtime;

pub const JSON_FILE: &str = "packages.json";

/// Writes all records as a pretty-printed JSON array to `packages.json`.
pub struct JsonRenderer<'a, R: Runtime> {
    runtime: &'a R,
}

impl<'a, R: Runtime> JsonRenderer<'a, R> {
    pub fn new(runtime: &'a R) -> Self {
        Self { runtime }
    }
}

impl<R: Runtime> Renderer for JsonRenderer<'_, R> {
    #[tracing::instrument(skip(self, records))]
    fn render(&self, records: &[PackageRecord], out_dir: &Path) -> Result<usize> {
        let json = serde_json::to_string_pretty(records).context("Failed to serialize packages")?;
        self.runtime.write(&out_dir.join(JSON_FILE), json.as_bytes())?;
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::{always, eq};
    use std::path::PathBuf;

    #[test]
    fn test_render_json() {
        let mut runtime = MockRuntime::new();
        let out_dir = PathBuf::from("/tmp/out");

        runtime
            .expect_write()
            .with(eq(out_dir.join("packages.json")), always())
            .times(1)
            .returning(|_, contents| {
                let value: serde_json::Value = serde_json::from_slice(contents).unwrap();
                assert_eq!(value[0]["name"], "a");
                assert_eq!(value[0]["dependencies"][0], "b");
                assert_eq!(value[1]["reverse_dependencies"][0], "a");
                Ok(())
            });

        let mut a = PackageRecord::new("a");
        a.dependencies.push("b".into());
        let mut b = PackageRecord::new("b");
        b.reverse_dependencies.push("a".into());

        let count = JsonRenderer::new(&runtime).render(&[a, b], &out_dir).unwrap();
        assert_eq!(count, 1);
    }
}
