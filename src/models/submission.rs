use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A student's uploaded image within a session.
///
/// Media fields are nullable server-side (thumbnails are generated
/// asynchronously), so everything beyond the identifiers defaults to
/// absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    pub id: String,
    /// Id of the owning session.
    pub session: String,
    #[serde(default)]
    pub session_name: Option<String>,
    #[serde(default)]
    pub session_code: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_size: Option<i64>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_decodes_minimal_payload() {
        let json = r#"{
            "id": "b6589fc6-ab0d-4c82-8f12-099d1c2d40ab",
            "session": "8f14e45f-ea3b-4649-9df4-6c2a0f3b1a11",
            "uploaded_at": "2025-11-04T09:45:00Z"
        }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.likes, 0);
        assert!(!submission.is_liked);
        assert!(submission.thumbnail_url.is_none());
    }

    #[test]
    fn submission_requires_uploaded_at() {
        let json = r#"{
            "id": "b6589fc6-ab0d-4c82-8f12-099d1c2d40ab",
            "session": "8f14e45f-ea3b-4649-9df4-6c2a0f3b1a11"
        }"#;
        assert!(serde_json::from_str::<Submission>(json).is_err());
    }

    #[test]
    fn submission_decodes_full_payload() {
        let json = r#"{
            "id": "b6589fc6-ab0d-4c82-8f12-099d1c2d40ab",
            "session": "8f14e45f-ea3b-4649-9df4-6c2a0f3b1a11",
            "session_name": "Sketch the water cycle",
            "session_code": "XK42PD",
            "student_name": "Avery",
            "image": "submissions/avery.png",
            "image_url": "http://localhost:8000/media/submissions/avery.png",
            "thumbnail": null,
            "thumbnail_url": null,
            "file_name": "avery.png",
            "file_size": 20480,
            "mime_type": "image/png",
            "likes": 3,
            "is_liked": true,
            "metadata": {"width": 800, "height": 600},
            "uploaded_at": "2025-11-04T09:45:00Z",
            "deleted_at": null
        }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.student_name.as_deref(), Some("Avery"));
        assert_eq!(submission.file_size, Some(20480));
        assert_eq!(submission.metadata.unwrap()["width"], 800);
    }
}
