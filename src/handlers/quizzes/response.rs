//! Quiz response DTOs

use serde::Serialize;

use crate::models::Answer;

/// Quiz projection: title only
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub title: String,
}

/// Answer as exposed to clients.
///
/// `is_right` is deliberately included; the API hides nothing from the
/// client.
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub id: i64,
    pub answer_text: String,
    pub is_right: bool,
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.id,
            answer_text: answer.answer_text,
            is_right: answer.is_right,
        }
    }
}

/// Random-question response: title plus the full answer list
#[derive(Debug, Serialize)]
pub struct RandomQuestionResponse {
    pub title: String,
    pub answers: Vec<AnswerResponse>,
}

/// Question as returned by the topic listing, with its nested quiz
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub quiz: QuizResponse,
    pub title: String,
    pub answers: Vec<AnswerResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn keys(value: &serde_json::Value) -> Vec<String> {
        value
            .as_object()
            .expect("object")
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn test_quiz_response_projects_only_title() {
        let value = serde_json::to_value(QuizResponse {
            title: "Python".to_string(),
        })
        .unwrap();

        assert_eq!(keys(&value), vec!["title"]);
    }

    #[test]
    fn test_answer_response_field_names() {
        let answer = Answer {
            id: 1,
            question_id: 7,
            answer_text: "A web framework".to_string(),
            is_right: true,
            date_updated: Utc::now(),
        };
        let value = serde_json::to_value(AnswerResponse::from(answer)).unwrap();

        let mut names = keys(&value);
        names.sort();
        assert_eq!(names, vec!["answer_text", "id", "is_right"]);
        assert_eq!(value["is_right"], serde_json::json!(true));
    }

    #[test]
    fn test_question_response_nests_quiz_title() {
        let value = serde_json::to_value(QuestionResponse {
            quiz: QuizResponse {
                title: "Databases".to_string(),
            },
            title: "What is an index?".to_string(),
            answers: vec![],
        })
        .unwrap();

        assert_eq!(value["quiz"]["title"], serde_json::json!("Databases"));
        let mut names = keys(&value);
        names.sort();
        assert_eq!(names, vec!["answers", "quiz", "title"]);
    }
}
