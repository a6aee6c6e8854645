//! Package database module
//!
//! This module turns the dpkg status database into linked package records:
//! parsing the stanzas, deduplicating dependencies, deriving reverse
//! dependencies and ordering the collection by name.

mod depends;
mod linker;
mod parser;
mod record;
mod sort;

pub use depends::parse_depends;
pub use linker::{LinkSummary, link_records};
pub use parser::{RecordParser, parse_records};
pub use record::PackageRecord;
pub use sort::sort_by_name;
