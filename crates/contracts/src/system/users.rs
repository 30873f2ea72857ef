use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

/// `GET /api/usuarios`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    #[serde(rename = "usuarios")]
    pub items: Vec<User>,
}
