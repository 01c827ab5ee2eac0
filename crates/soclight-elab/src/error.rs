//! Elaboration errors.

use soclight_boards::BoardError;
use soclight_core::PlanError;
use thiserror::Error;

/// Errors that can occur during the elaboration pipeline.
///
/// All of them are configuration mistakes surfaced verbatim to the invoking
/// build process; nothing here is transient or retried.
#[derive(Debug, Error)]
pub enum ElaborationError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Board(#[from] BoardError),
}
