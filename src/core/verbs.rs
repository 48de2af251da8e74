//! Status verbs for [`Progress`](super::Progress)

pub const USING: &str = "Using";
pub const READING: &str = "Reading";
pub const PROCESSING: &str = "Processing";
pub const ROMANIZING: &str = "Romanizing";
pub const PROCESSED: &str = "Processed";
pub const SKIPPED: &str = "Skipped";
pub const FAILED: &str = "Failed";
pub const DONE: &str = "Done";
