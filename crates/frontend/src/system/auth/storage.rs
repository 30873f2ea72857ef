use contracts::system::auth::UserInfo;
use web_sys::window;

use super::session::Session;

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "auth_user";
const PERMISSIONS_KEY: &str = "auth_permissions";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(storage: &web_sys::Storage, key: &str) -> Option<String> {
    storage.get_item(key).ok()?
}

/// Persist the session under `auth_token`, `auth_user` and `auth_permissions`
pub fn save_session(session: &Session) {
    let Some(storage) = get_local_storage() else {
        log::warn!("localStorage unavailable, session not persisted");
        return;
    };
    let user = serde_json::to_string(&session.user).unwrap_or_default();
    let permissions = serde_json::to_string(&session.permissions).unwrap_or_default();
    let _ = storage.set_item(TOKEN_KEY, &session.token);
    let _ = storage.set_item(USER_KEY, &user);
    let _ = storage.set_item(PERMISSIONS_KEY, &permissions);
}

/// Session saved by a previous login; `None` when the token or user is missing
pub fn load_session() -> Option<Session> {
    let storage = get_local_storage()?;
    let token = get_item(&storage, TOKEN_KEY).filter(|t| !t.is_empty())?;
    let user = get_item(&storage, USER_KEY)?;
    let permissions = get_item(&storage, PERMISSIONS_KEY);
    restore(token, &user, permissions.as_deref())
}

fn restore(token: String, user: &str, permissions: Option<&str>) -> Option<Session> {
    let user: UserInfo = match serde_json::from_str(user) {
        Ok(user) => user,
        Err(e) => {
            log::warn!("stored user is unreadable: {}", e);
            return None;
        }
    };
    let permissions = permissions
        .and_then(|p| serde_json::from_str::<Vec<String>>(p).ok())
        .unwrap_or_default();
    Some(Session::new(token, user, permissions))
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
        let _ = storage.remove_item(PERMISSIONS_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = r#"{"id":2,"username":"mlopez","fullName":"María López","email":null,"isAdmin":false}"#;

    #[test]
    fn test_restore_reads_user_and_permissions() {
        let session = restore("tok".into(), USER, Some(r#"["ventas.ver"]"#)).expect("session");
        assert_eq!(session.token, "tok");
        assert_eq!(session.user.display_name(), "María López");
        assert_eq!(session.permissions, vec!["ventas.ver".to_string()]);
    }

    #[test]
    fn test_broken_permissions_degrade_to_none() {
        let session = restore("tok".into(), USER, Some("not json")).expect("session");
        assert!(session.permissions.is_empty());
    }

    #[test]
    fn test_broken_user_drops_the_session() {
        assert!(restore("tok".into(), "{", None).is_none());
    }
}
