//! Quiz handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{error::AppResult, services::QuizService, state::AppState};

use super::response::{QuestionResponse, QuizResponse};

/// List all quizzes (titles only)
pub async fn list_quizzes(State(state): State<AppState>) -> AppResult<Json<Vec<QuizResponse>>> {
    let quizzes = QuizService::list_quizzes(state.db()).await?;
    Ok(Json(quizzes))
}

/// Get one random question for a topic.
///
/// An empty match set answers with a bodyless 404 rather than the JSON
/// error envelope; the listing endpoint below returns 200 with an empty
/// list for the same condition. The asymmetry is intentional.
pub async fn random_question(
    State(state): State<AppState>,
    Path(topic): Path<String>,
) -> AppResult<Response> {
    match QuizService::random_question(state.db(), &topic).await? {
        Some(question) => Ok(Json(question).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// List all questions for a topic, possibly empty
pub async fn list_questions(
    State(state): State<AppState>,
    Path(topic): Path<String>,
) -> AppResult<Json<Vec<QuestionResponse>>> {
    let questions = QuizService::questions_by_topic(state.db(), &topic).await?;
    Ok(Json(questions))
}
