use contracts::shared::permissions::PermissionAction;
use contracts::system::auth::LoginResponse;
use leptos::prelude::*;

use super::session::{check_access, AccessDecision, Session};
use super::storage;
use crate::shared::api::ApiClient;
use crate::shared::api_utils::api_base;
use crate::shared::list::RowPermissions;

/// Current session, provided at the root of the app
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
}

impl AuthContext {
    /// Picks up a session saved by an earlier login
    pub fn restore() -> Self {
        let session = storage::load_session();
        if let Some(s) = &session {
            log::info!("session restored for {}", s.user.username);
        }
        Self {
            session: RwSignal::new(session),
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn has_permission(&self, required: &str) -> bool {
        self.session
            .with(|s| s.as_ref().is_some_and(|s| s.has_permission(required)))
    }

    pub fn can(&self, resource: &str, action: PermissionAction) -> bool {
        self.session
            .with(|s| s.as_ref().is_some_and(|s| s.can(resource, action)))
    }

    pub fn row_permissions(&self, resource: &str) -> RowPermissions {
        self.session
            .with_untracked(|s| s.as_ref().map(|s| s.row_permissions(resource)))
            .unwrap_or_default()
    }

    /// Guard decision for `path`; tracks the session
    pub fn access(&self, required: Option<&str>, path: &str) -> AccessDecision {
        self.session.with(|s| check_access(s.as_ref(), required, path))
    }

    /// API client carrying the current token. Does not subscribe the caller.
    pub fn client(&self) -> ApiClient {
        let token = self
            .session
            .with_untracked(|s| s.as_ref().map(|s| s.token.clone()));
        ApiClient::new(Default::default(), api_base(), token)
    }

    pub fn sign_in(&self, response: LoginResponse) {
        let session = Session::from(response);
        log::info!("signed in as {}", session.user.username);
        storage::save_session(&session);
        self.session.set(Some(session));
    }

    pub fn sign_out(&self) {
        log::info!("signed out");
        storage::clear_session();
        self.session.set(None);
    }

    /// The backend rejected the token; route guards send the user to login
    pub fn expire(&self) {
        if self.session.with_untracked(|s| s.is_some()) {
            log::warn!("session expired");
            self.sign_out();
        }
    }
}

pub fn provide_auth() -> AuthContext {
    let auth = AuthContext::restore();
    provide_context(auth);
    auth
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found in component tree")
}
