use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An image-upload session students submit into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    /// Short join code students type (or scan) to reach the session.
    pub session_code: String,
    pub name: String,
    #[serde(default)]
    pub question: Option<String>,
    /// User id of the owning teacher.
    pub teacher: i64,
    #[serde(default)]
    pub teacher_username: Option<String>,
    pub status: String,
    pub allow_anonymous: bool,
    pub max_submissions: i32,
    #[serde(default)]
    pub submission_count: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub qr_code: Option<String>,
    #[serde(default)]
    pub public_url: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionRequest {
    pub name: String,
    /// Prompt shown to students; omitted from the payload when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub allow_anonymous: bool,
    pub max_submissions: i32,
}

impl CreateSessionRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            question: None,
            allow_anonymous: true,
            max_submissions: 100,
        }
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }
}

/// Aggregate counters for a session. The stats endpoint also reports an
/// hourly histogram this client does not consume.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionStats {
    pub total_submissions: i64,
    pub total_likes: i64,
    pub liked_submissions: i64,
    pub average_file_size: f64,
    pub most_common_format: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DownloadRequest {
    pub include_metadata: bool,
    pub zip_filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_omits_unset_question() {
        let request = CreateSessionRequest::new("Sketch the water cycle");
        let encoded = serde_json::to_value(&request).unwrap();
        assert!(encoded.get("question").is_none());
        assert_eq!(encoded["allow_anonymous"], true);
        assert_eq!(encoded["max_submissions"], 100);

        let with_question = CreateSessionRequest::new("Sketch").question("Label each stage");
        let encoded = serde_json::to_value(&with_question).unwrap();
        assert_eq!(encoded["question"], "Label each stage");
    }

    #[test]
    fn session_decodes_with_null_closed_at() {
        let json = r#"{
            "id": "8f14e45f-ea3b-4649-9df4-6c2a0f3b1a11",
            "session_code": "XK42PD",
            "name": "Sketch the water cycle",
            "question": null,
            "teacher": 3,
            "teacher_username": "msrivera",
            "status": "active",
            "allow_anonymous": true,
            "max_submissions": 100,
            "submission_count": 12,
            "created_at": "2025-11-04T09:30:00Z",
            "closed_at": null,
            "qr_code": "data:image/png;base64,AAAA",
            "public_url": "http://localhost:8000/upload/XK42PD",
            "is_active": true
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.session_code, "XK42PD");
        assert!(session.closed_at.is_none());
        assert!(session.question.is_none());
    }

    #[test]
    fn stats_ignore_unconsumed_histogram() {
        let json = r#"{
            "total_submissions": 12,
            "total_likes": 5,
            "liked_submissions": 4,
            "average_file_size": 20480.5,
            "most_common_format": "image/jpeg",
            "submissions_by_hour": {"2025-11-04 09:00:00+00:00": 12}
        }"#;
        let stats: SessionStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_submissions, 12);
        assert_eq!(stats.most_common_format, "image/jpeg");
    }
}
