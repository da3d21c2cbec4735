//! HTTP handlers for game endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::game::{
    AccuseSuspectCommand, AccuseSuspectHandler, AskQuestionCommand, AskQuestionHandler,
    NewGameCommand, NewGameHandler, SuspectLimits,
};
use crate::domain::foundation::{GameId, SuspectId};
use crate::domain::game::GameError;
use crate::ports::{GameMaster, GameRepository};

use super::dto::{
    messages_of, AccuseRequest, AccuseResponse, AskRequest, AskResponse, ErrorResponse,
    HealthResponse, NewGameRequest, NewGameResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct GameHandlers {
    new_game_handler: Arc<NewGameHandler>,
    ask_handler: Arc<AskQuestionHandler>,
    accuse_handler: Arc<AccuseSuspectHandler>,
    repository: Arc<dyn GameRepository>,
    game_master_name: String,
}

impl GameHandlers {
    pub fn new(
        game_master: Arc<dyn GameMaster>,
        repository: Arc<dyn GameRepository>,
        limits: SuspectLimits,
    ) -> Self {
        Self {
            new_game_handler: Arc::new(NewGameHandler::new(
                game_master.clone(),
                repository.clone(),
                limits,
            )),
            ask_handler: Arc::new(AskQuestionHandler::new(game_master.clone(), repository.clone())),
            accuse_handler: Arc::new(AccuseSuspectHandler::new(repository.clone())),
            game_master_name: game_master.name(),
            repository,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/new_game - Start a new case
///
/// An empty body asks for the default case.
pub async fn new_game(State(handlers): State<GameHandlers>, body: Bytes) -> Response {
    let req = if body.iter().all(u8::is_ascii_whitespace) {
        NewGameRequest::default()
    } else {
        match serde_json::from_slice::<NewGameRequest>(&body) {
            Ok(req) => req,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request(format!("Invalid request body: {}", e))),
                )
                    .into_response()
            }
        }
    };
    let cmd = NewGameCommand {
        num_suspects: req.num_suspects,
    };

    match handlers.new_game_handler.handle(cmd).await {
        Ok(result) => {
            let response = NewGameResponse::from(&result.game);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_game_error(e),
    }
}

/// POST /api/ask - Question a suspect
pub async fn ask_question(
    State(handlers): State<GameHandlers>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_body(rejection),
    };
    let game_id = match parse_game_id(&req.game_id) {
        Ok(id) => id,
        Err(e) => return handle_game_error(e),
    };

    let cmd = AskQuestionCommand {
        game_id,
        suspect_id: SuspectId::new(req.suspect_id.trim()),
        question: req.question,
    };

    match handlers.ask_handler.handle(cmd).await {
        Ok(result) => {
            let response = AskResponse::new(&result.game, result.answer);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_game_error(e),
    }
}

/// POST /api/accuse - Name the criminal and end the game
pub async fn accuse_suspect(
    State(handlers): State<GameHandlers>,
    body: Result<Json<AccuseRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_body(rejection),
    };
    let game_id = match parse_game_id(&req.game_id) {
        Ok(id) => id,
        Err(e) => return handle_game_error(e),
    };

    let cmd = AccuseSuspectCommand {
        game_id,
        suspect_id: SuspectId::new(req.suspect_id.trim()),
    };

    match handlers.accuse_handler.handle(cmd).await {
        Ok(outcome) => {
            let response = AccuseResponse {
                game_over: outcome.game.is_over(),
                result: outcome.result,
                messages: messages_of(&outcome.game),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_game_error(e),
    }
}

/// GET /api/health - Liveness plus the active game master
pub async fn health(State(handlers): State<GameHandlers>) -> Response {
    match handlers.repository.count().await {
        Ok(active_games) => {
            let response = HealthResponse {
                status: "ok".to_string(),
                game_master: handlers.game_master_name.clone(),
                active_games,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_game_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

/// A game id that is not a UUID cannot name a game.
fn parse_game_id(raw: &str) -> Result<GameId, GameError> {
    raw.trim()
        .parse::<GameId>()
        .map_err(|_| GameError::not_found(raw))
}

fn bad_body(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

fn handle_game_error(error: GameError) -> Response {
    let status = match &error {
        GameError::NotFound(_) => StatusCode::NOT_FOUND,
        GameError::GameOver | GameError::UnknownSuspect(_) | GameError::Validation(_) => {
            StatusCode::BAD_REQUEST
        }
        GameError::Conflict { .. } => StatusCode::CONFLICT,
        GameError::GameMaster(_) => StatusCode::BAD_GATEWAY,
        GameError::Storage(msg) => {
            tracing::error!(error = %msg, "game storage failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Game storage failed")),
            )
                .into_response();
        }
    };
    (status, Json(ErrorResponse::from(&error))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn status_and_body(error: GameError) -> (StatusCode, ErrorResponse) {
        let response = handle_game_error(error);
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn errors_map_to_statuses() {
        let cases = [
            (GameError::not_found("x"), StatusCode::NOT_FOUND, "GAME_NOT_FOUND"),
            (GameError::GameOver, StatusCode::BAD_REQUEST, "GAME_OVER"),
            (
                GameError::UnknownSuspect(SuspectId::from("s9")),
                StatusCode::BAD_REQUEST,
                "UNKNOWN_SUSPECT",
            ),
            (GameError::game_master("down"), StatusCode::BAD_GATEWAY, "GAME_MASTER_FAILED"),
            (
                GameError::Conflict {
                    id: "x".to_string(),
                    expected: 1,
                    actual: 2,
                },
                StatusCode::CONFLICT,
                "GAME_CONFLICT",
            ),
        ];
        for (error, status, code) in cases {
            let (actual, body) = status_and_body(error).await;
            assert_eq!(actual, status);
            assert_eq!(body.code, code);
        }
    }

    #[tokio::test]
    async fn storage_errors_hide_details() {
        let (status, body) = status_and_body(GameError::storage("disk on fire")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "INTERNAL_ERROR");
        assert!(!body.message.contains("disk"));
    }

    #[test]
    fn malformed_game_id_is_not_found() {
        assert!(matches!(parse_game_id("nope"), Err(GameError::NotFound(_))));
        let id = GameId::new();
        assert_eq!(parse_game_id(&format!(" {} ", id)).unwrap(), id);
    }
}
