//! Static file lookup
//!
//! Maps request paths onto the filesystem and loads file content.

pub mod resolver;

pub use resolver::{FileResolver, ResolveError, ResolvedFile};
