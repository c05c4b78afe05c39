//! Error types

use thiserror::Error;

/// The only in-domain "failure" — a refused withdrawal — is a boolean
/// outcome, not an error. Errors here are runtime infrastructure only.
#[derive(Error, Debug)]
pub enum DepotError {
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
