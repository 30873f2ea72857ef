//! Authenticated session and the access rules derived from it

use contracts::shared::permissions::{permission, PermissionAction};
use contracts::system::auth::{LoginResponse, UserInfo};

use crate::shared::list::RowPermissions;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
    pub permissions: Vec<String>,
}

impl Session {
    pub fn new(token: String, user: UserInfo, permissions: Vec<String>) -> Self {
        Self {
            token,
            user,
            permissions,
        }
    }

    /// Admins hold every permission
    pub fn has_permission(&self, required: &str) -> bool {
        self.user.is_admin || self.permissions.iter().any(|p| p == required)
    }

    pub fn can(&self, resource: &str, action: PermissionAction) -> bool {
        self.has_permission(&permission(resource, action))
    }

    /// Row action flags for a list over `resource`
    pub fn row_permissions(&self, resource: &str) -> RowPermissions {
        RowPermissions {
            view: self.can(resource, PermissionAction::View),
            update: self.can(resource, PermissionAction::Update),
            delete: self.can(resource, PermissionAction::Delete),
        }
    }
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Session::new(response.token, response.user, response.permissions)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    /// Redirect target, `/login?next=...`
    Login(String),
    Unauthorized,
}

/// Route guard rule: no session goes to login, a missing permission to
/// `/unauthorized`
pub fn check_access(session: Option<&Session>, required: Option<&str>, path: &str) -> AccessDecision {
    let Some(session) = session else {
        return AccessDecision::Login(login_redirect(path));
    };
    match required {
        Some(p) if !session.has_permission(p) => AccessDecision::Unauthorized,
        _ => AccessDecision::Granted,
    }
}

pub fn login_redirect(path: &str) -> String {
    if path.is_empty() || path == "/" || path.starts_with(LOGIN_PATH) {
        return LOGIN_PATH.to_string();
    }
    format!("{}?next={}", LOGIN_PATH, urlencoding::encode(path))
}

/// Where to go after login; only in-app paths are honoured
pub fn next_target(next: Option<&str>) -> String {
    match next {
        Some(n) if n.starts_with('/') && !n.starts_with("//") && !n.starts_with(LOGIN_PATH) => {
            n.to_string()
        }
        _ => "/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(is_admin: bool, permissions: &[&str]) -> Session {
        Session::new(
            "tok".to_string(),
            UserInfo {
                id: 1,
                username: "mlopez".to_string(),
                full_name: None,
                email: None,
                is_admin,
            },
            permissions.iter().map(|p| p.to_string()).collect(),
        )
    }

    #[test]
    fn test_permission_lookup() {
        let s = session(false, &["ventas.ver", "ventas.eliminar"]);
        assert!(s.has_permission("ventas.ver"));
        assert!(!s.has_permission("ventas.editar"));
        assert!(session(true, &[]).has_permission("usuarios.eliminar"));
    }

    #[test]
    fn test_row_permissions_follow_session() {
        let s = session(false, &["clientes.ver", "clientes.eliminar"]);
        let flags = s.row_permissions("clientes");
        assert!(flags.view && flags.delete && !flags.update);
        assert_eq!(session(true, &[]).row_permissions("clientes"), RowPermissions::all());
    }

    #[test]
    fn test_check_access() {
        let s = session(false, &["articulos.ver"]);
        assert_eq!(
            check_access(None, Some("articulos.ver"), "/articulos"),
            AccessDecision::Login("/login?next=%2Farticulos".to_string())
        );
        assert_eq!(check_access(Some(&s), Some("articulos.ver"), "/articulos"), AccessDecision::Granted);
        assert_eq!(check_access(Some(&s), Some("ventas.ver"), "/ventas"), AccessDecision::Unauthorized);
        assert_eq!(check_access(Some(&s), None, "/"), AccessDecision::Granted);
    }

    #[test]
    fn test_login_redirect_skips_trivial_targets() {
        assert_eq!(login_redirect("/"), "/login");
        assert_eq!(login_redirect("/login"), "/login");
        assert_eq!(login_redirect("/ventas/7"), "/login?next=%2Fventas%2F7");
    }

    #[test]
    fn test_next_target_rejects_foreign_urls() {
        assert_eq!(next_target(Some("/ventas")), "/ventas");
        assert_eq!(next_target(Some("//evil.example")), "/");
        assert_eq!(next_target(Some("https://evil.example")), "/");
        assert_eq!(next_target(None), "/");
    }
}
