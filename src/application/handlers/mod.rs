//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod game;

pub use game::{
    AccuseSuspectCommand, AccuseSuspectHandler, AccuseSuspectResult, AskQuestionCommand,
    AskQuestionHandler, AskQuestionResult, NewGameCommand, NewGameHandler, NewGameResult,
    SuspectLimits,
};
