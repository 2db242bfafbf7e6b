//! Image-upload session and submission endpoints.

use crate::api::{ApiError, RequestExecutor, UploadForm};
use crate::models::session::DownloadRequest;
use crate::models::{CreateSessionRequest, Session, SessionStats, Submission};

#[derive(Debug, Clone)]
pub struct SessionClient {
    executor: RequestExecutor,
    base: String,
}

impl SessionClient {
    pub(crate) fn new(executor: RequestExecutor, api_base: &str) -> Self {
        Self {
            executor,
            base: format!("{}/image-upload", api_base.trim_end_matches('/')),
        }
    }

    pub async fn create(&self, request: &CreateSessionRequest) -> Result<Session, ApiError> {
        let url = format!("{}/sessions/", self.base);
        self.executor.post(&url, request).await
    }

    pub async fn get(&self, session_id: &str) -> Result<Session, ApiError> {
        let url = format!("{}/sessions/{}/", self.base, session_id);
        self.executor.get(&url).await
    }

    /// All sessions owned by the authenticated teacher.
    pub async fn teacher_sessions(&self) -> Result<Vec<Session>, ApiError> {
        let url = format!("{}/teacher/sessions/", self.base);
        self.executor.get(&url).await
    }

    pub async fn close(&self, session_id: &str) -> Result<Session, ApiError> {
        let url = format!("{}/sessions/{}/close/", self.base, session_id);
        self.executor.post_empty(&url).await
    }

    pub async fn stats(&self, session_id: &str) -> Result<SessionStats, ApiError> {
        let url = format!("{}/sessions/{}/stats/", self.base, session_id);
        self.executor.get(&url).await
    }

    /// Submissions for a session, addressed by its join code.
    pub async fn submissions(&self, session_code: &str) -> Result<Vec<Submission>, ApiError> {
        let url = format!("{}/sessions/{}/submissions/", self.base, session_code);
        self.executor.get(&url).await
    }

    /// Upload an image into a session as a multipart form.
    pub async fn upload_image(
        &self,
        session_code: &str,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
        student_name: Option<&str>,
    ) -> Result<Submission, ApiError> {
        let url = format!("{}/sessions/{}/submissions/", self.base, session_code);
        let mut form = UploadForm::new(file_name, mime_type, bytes);
        if let Some(name) = student_name {
            form = form.field("student_name", name);
        }
        self.executor.execute_multipart(&url, &form).await
    }

    pub async fn toggle_like(&self, submission_id: &str) -> Result<Submission, ApiError> {
        let url = format!("{}/submissions/{}/like/", self.base, submission_id);
        self.executor.post_empty(&url).await
    }

    pub async fn delete_submission(&self, submission_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/submissions/{}/", self.base, submission_id);
        self.executor.delete_unit(&url).await
    }

    /// Download every submission in a session as a ZIP archive.
    pub async fn download_submissions(
        &self,
        session_id: &str,
        include_metadata: bool,
    ) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}/sessions/{}/download/", self.base, session_id);
        let body = DownloadRequest {
            include_metadata,
            zip_filename: format!("session_{}_submissions.zip", session_id),
        };
        let request = crate::api::Request::post(url).json(&body)?;
        self.executor.execute_raw(request).await
    }
}
