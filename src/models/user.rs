use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Token pair issued by the login endpoint. Servers may attach extra
/// profile fields; anything beyond the pair is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredUser {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_tolerates_extra_fields() {
        let json = r#"{"access":"A1","refresh":"R1","username":"teach","is_staff":false}"#;
        let parsed: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access, "A1");
        assert_eq!(parsed.refresh, "R1");
    }

    #[test]
    fn login_response_requires_both_tokens() {
        assert!(serde_json::from_str::<LoginResponse>(r#"{"access":"A1"}"#).is_err());
        assert!(serde_json::from_str::<LoginResponse>(r#"{"refresh":"R1"}"#).is_err());
    }
}
