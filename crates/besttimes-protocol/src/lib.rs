pub mod level;
pub mod protocol;
pub mod query;

/// Version pinned in the `Credentials` block of every score document.
/// Bumped whenever the document shape changes.
pub const SCHEMA_VERSION: u32 = 1;
