//! Quiz endpoints.

use crate::api::{ApiError, RequestExecutor};
use crate::models::{CreateMultipleChoiceQuiz, Quiz, QuizUpdate};

#[derive(Debug, Clone)]
pub struct QuizClient {
    executor: RequestExecutor,
    base: String,
}

impl QuizClient {
    pub(crate) fn new(executor: RequestExecutor, api_base: &str) -> Self {
        Self {
            executor,
            base: format!("{}/quizzes", api_base.trim_end_matches('/')),
        }
    }

    pub async fn create_multiple_choice(
        &self,
        request: &CreateMultipleChoiceQuiz,
    ) -> Result<Quiz, ApiError> {
        let url = format!("{}/create/multiple-choice/", self.base);
        self.executor.post(&url, request).await
    }

    /// All quizzes belonging to a course.
    pub async fn for_course(&self, course_id: i64) -> Result<Vec<Quiz>, ApiError> {
        let url = format!("{}/course/{}/", self.base, course_id);
        self.executor.get(&url).await
    }

    pub async fn get(&self, id: i64) -> Result<Quiz, ApiError> {
        let url = format!("{}/{}/", self.base, id);
        self.executor.get(&url).await
    }

    /// Partially update a quiz; unset fields are left untouched.
    pub async fn update(&self, id: i64, patch: &QuizUpdate) -> Result<Quiz, ApiError> {
        let url = format!("{}/{}/", self.base, id);
        self.executor.patch(&url, patch).await
    }
}
