use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizChoice {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizProperties {
    pub question_text: String,
    pub allow_multiple_choices: bool,
    pub choices: Vec<QuizChoice>,
    pub number_of_choices: i32,
    pub has_correct_answer: bool,
    pub competition_mode: bool,
    pub randomize_choice_order: bool,
    pub points_per_correct: i32,
    pub penalty_per_wrong: i32,
}

impl Default for QuizProperties {
    fn default() -> Self {
        Self {
            question_text: String::new(),
            allow_multiple_choices: false,
            choices: Vec::new(),
            number_of_choices: 0,
            has_correct_answer: true,
            competition_mode: false,
            randomize_choice_order: false,
            points_per_correct: 1,
            penalty_per_wrong: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateMultipleChoiceQuiz {
    pub course: i64,
    pub title: String,
    pub properties: QuizProperties,
}

/// Partial quiz update; `None` fields are left untouched server-side and
/// omitted from the wire payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuizUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub course: i64,
    pub quiz_type: String,
    pub properties: QuizProperties,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_serializes_snake_case() {
        let request = CreateMultipleChoiceQuiz {
            course: 4,
            title: "Fractions check-in".to_string(),
            properties: QuizProperties {
                question_text: "What is 1/2 + 1/4?".to_string(),
                number_of_choices: 2,
                choices: vec![
                    QuizChoice {
                        text: "3/4".to_string(),
                        is_correct: true,
                    },
                    QuizChoice {
                        text: "2/6".to_string(),
                        is_correct: false,
                    },
                ],
                ..QuizProperties::default()
            },
        };

        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["properties"]["question_text"], "What is 1/2 + 1/4?");
        assert_eq!(encoded["properties"]["points_per_correct"], 1);
        assert_eq!(encoded["properties"]["choices"][0]["is_correct"], true);
    }

    #[test]
    fn quiz_update_omits_unset_fields() {
        let patch = QuizUpdate {
            is_active: Some(false),
            ..QuizUpdate::default()
        };
        let encoded = serde_json::to_string(&patch).unwrap();
        assert_eq!(encoded, r#"{"is_active":false}"#);
    }

    #[test]
    fn quiz_decode_ignores_unknown_fields() {
        let json = r#"{
            "id": 12,
            "title": "Fractions check-in",
            "course": 4,
            "quiz_type": "multiple_choice",
            "properties": {
                "question_text": "What is 1/2 + 1/4?",
                "allow_multiple_choices": false,
                "choices": [],
                "number_of_choices": 0,
                "has_correct_answer": true,
                "competition_mode": false,
                "randomize_choice_order": false,
                "points_per_correct": 1,
                "penalty_per_wrong": 0
            },
            "created_at": "2025-11-04T10:00:00Z",
            "is_active": true,
            "quiz_type_display": "Multiple Choice"
        }"#;
        let quiz: Quiz = serde_json::from_str(json).unwrap();
        assert_eq!(quiz.quiz_type, "multiple_choice");
        assert!(quiz.is_active);
    }
}
