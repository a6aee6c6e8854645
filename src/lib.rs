pub mod commands;
pub mod package;
pub mod render;
pub mod runtime;

/// Test utilities shared by the unit tests.
#[cfg(test)]
pub mod test_utils {
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;
    use std::io::{BufRead, Cursor};
    use std::path::PathBuf;

    /// Returns the status database path used in tests.
    pub fn test_status_path() -> PathBuf {
        PathBuf::from("/var/lib/dpkg/status")
    }

    /// Returns the output directory used in tests.
    pub fn test_output_dir() -> PathBuf {
        PathBuf::from("/srv/packages")
    }

    /// Expect exactly one `open` of [`test_status_path`], serving `contents`.
    pub fn expect_status(runtime: &mut MockRuntime, contents: &'static str) {
        runtime
            .expect_open()
            .with(eq(test_status_path()))
            .times(1)
            .returning(move |_| {
                let reader: Box<dyn BufRead> = Box::new(Cursor::new(contents.as_bytes().to_vec()));
                Ok(reader)
            });
    }
}
