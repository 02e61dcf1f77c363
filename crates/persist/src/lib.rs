//! `tally-persist` — JSON snapshot persistence collaborator.
//!
//! Serializes a full record snapshot to field-labeled JSON and restores it.
//! Failures (missing file, malformed content) surface as recoverable errors,
//! never a crash.

pub mod snapshot;

pub use snapshot::{PersistError, SnapshotFile, from_bytes, to_bytes};
