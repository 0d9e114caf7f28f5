use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated identity, persisted as a single record in the session slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub join_date: DateTime<Utc>,
    #[serde(default)]
    pub is_admin: bool,
}

impl Session {
    /// First letter of the username, upper-cased (avatar fallback)
    pub fn initial(&self) -> Option<char> {
        self.username.chars().next().map(|c| c.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_camel_case_fields() {
        let raw = r#"{"id":"2","username":"otaku_fan","email":"user@example.com","joinDate":"2024-02-20T00:00:00Z","isAdmin":false}"#;
        let session: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(session.username, "otaku_fan");
        assert!(!session.is_admin);
        assert_eq!(session.initial(), Some('O'));

        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"joinDate\""));
        assert!(json.contains("\"isAdmin\":false"));
        assert!(!json.contains("join_date"));
    }
}
