//! Quiz repository
//!
//! Read-only access to quizzes, questions, and answers. The topic filter
//! matches the parent quiz title exactly (case-sensitive, no partial
//! matching).

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Answer, Question, Quiz},
};

/// Repository for quiz database operations
pub struct QuizRepository;

impl QuizRepository {
    /// List all quizzes, stable by id
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Quiz>> {
        let quizzes = sqlx::query_as::<_, Quiz>(r#"SELECT * FROM quizzes ORDER BY id"#)
            .fetch_all(pool)
            .await?;

        Ok(quizzes)
    }

    /// Pick one question uniformly at random among those whose parent
    /// quiz title equals `topic`
    pub async fn random_question_by_topic(
        pool: &PgPool,
        topic: &str,
    ) -> AppResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT q.*
            FROM questions q
            JOIN quizzes z ON z.id = q.quiz_id
            WHERE z.title = $1
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .bind(topic)
        .fetch_optional(pool)
        .await?;

        Ok(question)
    }

    /// All questions whose parent quiz title equals `topic`, ordered by
    /// ascending creation id
    pub async fn questions_by_topic(pool: &PgPool, topic: &str) -> AppResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT q.*
            FROM questions q
            JOIN quizzes z ON z.id = q.quiz_id
            WHERE z.title = $1
            ORDER BY q.id
            "#,
        )
        .bind(topic)
        .fetch_all(pool)
        .await?;

        Ok(questions)
    }

    /// Answers for a question, ordered by id
    pub async fn answers_for_question(pool: &PgPool, question_id: i64) -> AppResult<Vec<Answer>> {
        let answers = sqlx::query_as::<_, Answer>(
            r#"SELECT * FROM answers WHERE question_id = $1 ORDER BY id"#,
        )
        .bind(question_id)
        .fetch_all(pool)
        .await?;

        Ok(answers)
    }

    /// Find the quiz a question belongs to
    pub async fn find_quiz_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Quiz>> {
        let quiz = sqlx::query_as::<_, Quiz>(r#"SELECT * FROM quizzes WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(quiz)
    }
}
