//! Runtime abstraction for filesystem operations.
//!
//! The pipeline only touches the filesystem through [`Runtime`], so tests can
//! substitute a mock and assert exactly which files get read or written.
//!
//! # Structure
//!
//! - `fs` - File system operations (open, write, directory)

mod fs;

use anyhow::Result;
use std::io::BufRead;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime {
    // File System
    fn open(&self, path: &Path) -> Result<Box<dyn BufRead>>;
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn is_dir(&self, path: &Path) -> bool;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn open(&self, path: &Path) -> Result<Box<dyn BufRead>> {
        self.open_impl(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_impl(path)
    }
}
