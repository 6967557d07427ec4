//! Quiz service
//!
//! Read-only retrieval flows. Note the deliberate asymmetry: an empty
//! topic yields not-found from the random endpoint but an empty list from
//! the listing endpoint.

use sqlx::PgPool;

use crate::{
    db::repositories::QuizRepository,
    error::AppResult,
    handlers::quizzes::response::{
        AnswerResponse, QuestionResponse, QuizResponse, RandomQuestionResponse,
    },
    models::Question,
};

/// Quiz service for business logic
pub struct QuizService;

impl QuizService {
    /// List all quizzes, projecting only the title
    pub async fn list_quizzes(pool: &PgPool) -> AppResult<Vec<QuizResponse>> {
        let quizzes = QuizRepository::list(pool).await?;

        Ok(quizzes
            .into_iter()
            .map(|q| QuizResponse { title: q.title })
            .collect())
    }

    /// One uniformly-random question for the topic, or `None` when no
    /// question's parent quiz title matches
    pub async fn random_question(
        pool: &PgPool,
        topic: &str,
    ) -> AppResult<Option<RandomQuestionResponse>> {
        let Some(question) = QuizRepository::random_question_by_topic(pool, topic).await? else {
            return Ok(None);
        };

        let answers = QuizRepository::answers_for_question(pool, question.id).await?;

        Ok(Some(RandomQuestionResponse {
            title: question.title,
            answers: answers.into_iter().map(AnswerResponse::from).collect(),
        }))
    }

    /// All questions for the topic, ascending by creation id, each with
    /// its nested quiz title and answers
    pub async fn questions_by_topic(
        pool: &PgPool,
        topic: &str,
    ) -> AppResult<Vec<QuestionResponse>> {
        let questions = QuizRepository::questions_by_topic(pool, topic).await?;

        futures::future::try_join_all(
            questions
                .into_iter()
                .map(|q| Self::to_question_response(pool, q)),
        )
        .await
    }

    async fn to_question_response(pool: &PgPool, question: Question) -> AppResult<QuestionResponse> {
        let quiz_title = QuizRepository::find_quiz_by_id(pool, question.quiz_id)
            .await?
            .map(|quiz| quiz.title)
            .unwrap_or_default();

        let answers = QuizRepository::answers_for_question(pool, question.id).await?;

        Ok(QuestionResponse {
            quiz: QuizResponse { title: quiz_title },
            title: question.title,
            answers: answers.into_iter().map(AnswerResponse::from).collect(),
        })
    }
}
