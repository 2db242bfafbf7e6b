use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course owned by the authenticated teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    /// User id of the owning teacher (assigned server-side).
    pub teacher: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateCourseRequest<'a> {
    pub name: &'a str,
}
