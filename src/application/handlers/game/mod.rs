//! Game handlers - new game, questioning and accusation.

mod accuse_suspect;
mod ask_question;
mod new_game;

pub use accuse_suspect::{AccuseSuspectCommand, AccuseSuspectHandler, AccuseSuspectResult};
pub use ask_question::{AskQuestionCommand, AskQuestionHandler, AskQuestionResult};
pub use new_game::{NewGameCommand, NewGameHandler, NewGameResult, SuspectLimits};
