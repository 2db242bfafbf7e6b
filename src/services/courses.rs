//! Course endpoints.

use crate::api::{ApiError, RequestExecutor};
use crate::models::course::CreateCourseRequest;
use crate::models::Course;

#[derive(Debug, Clone)]
pub struct CourseClient {
    executor: RequestExecutor,
    base: String,
}

impl CourseClient {
    pub(crate) fn new(executor: RequestExecutor, api_base: &str) -> Self {
        Self {
            executor,
            base: format!("{}/courses", api_base.trim_end_matches('/')),
        }
    }

    pub async fn create(&self, name: &str) -> Result<Course, ApiError> {
        let url = format!("{}/", self.base);
        self.executor.post(&url, &CreateCourseRequest { name }).await
    }

    pub async fn list(&self) -> Result<Vec<Course>, ApiError> {
        let url = format!("{}/", self.base);
        self.executor.get(&url).await
    }

    pub async fn get(&self, id: i64) -> Result<Course, ApiError> {
        let url = format!("{}/{}/", self.base, id);
        self.executor.get(&url).await
    }
}
