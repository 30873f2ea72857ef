use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserInfo {
    /// Name shown in the top bar
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_without_permissions() {
        let body = r#"{"token":"abc","user":{"id":1,"username":"admin","fullName":null,"email":null,"isAdmin":true}}"#;
        let parsed: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.token, "abc");
        assert!(parsed.user.is_admin);
        assert!(parsed.permissions.is_empty());
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut user = UserInfo {
            id: 3,
            username: "mlopez".to_string(),
            full_name: Some("  ".to_string()),
            email: None,
            is_admin: false,
        };
        assert_eq!(user.display_name(), "mlopez");
        user.full_name = Some("María López".to_string());
        assert_eq!(user.display_name(), "María López");
    }
}
