//! Document-store upsert for lexical records.

mod notion;
mod props;

pub use notion::NotionStore;
pub use props::record_properties;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("store rejected {operation} with status {status}")]
    Api { status: u16, operation: String },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Whether an upsert created a new page or updated an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}
