//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and validation errors that form the
//! vocabulary of the game domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{GameId, SuspectId};
pub use timestamp::Timestamp;
