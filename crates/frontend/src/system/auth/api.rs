use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api::{ApiClient, ApiError, HttpTransport};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

/// `POST /api/auth/login`; a 401 here means bad credentials, not an expired session
pub async fn login<T: HttpTransport>(
    client: &ApiClient<T>,
    username: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    match client.post_public(LOGIN_ENDPOINT, &request).await {
        Err(ApiError::Unauthenticated) => Err(ApiError::Application(
            "Usuario o contraseña incorrectos".to_string(),
        )),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::mock::MockTransport;
    use crate::shared::api::transport::HttpMethod;
    use futures::executor::block_on;

    fn client(mock: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(mock.clone(), "http://api.test", None)
    }

    #[test]
    fn test_login_posts_credentials_without_bearer() {
        let mock = MockTransport::new();
        mock.respond(
            200,
            r#"{"token":"t1","user":{"id":1,"username":"admin","isAdmin":true},"permissions":["ventas.ver"]}"#,
        );

        let response = block_on(login(&client(&mock), "admin".into(), "secreto".into())).unwrap();
        assert_eq!(response.token, "t1");
        assert_eq!(response.permissions, vec!["ventas.ver".to_string()]);

        let sent = mock.requests();
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].url, "http://api.test/api/auth/login");
        assert_eq!(sent[0].bearer, None);
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["username"], "admin");
        assert_eq!(body["password"], "secreto");
    }

    #[test]
    fn test_rejected_credentials_are_an_application_error() {
        let mock = MockTransport::new();
        mock.respond(401, "");
        let err = block_on(login(&client(&mock), "admin".into(), "mal".into())).unwrap_err();
        assert_eq!(err, ApiError::Application("Usuario o contraseña incorrectos".to_string()));
    }

    #[test]
    fn test_backend_error_text_is_kept() {
        let mock = MockTransport::new();
        mock.respond(403, r#"{"error":"Usuario inactivo"}"#);
        let err = block_on(login(&client(&mock), "pepe".into(), "x".into())).unwrap_err();
        assert_eq!(err.to_string(), "Usuario inactivo");
    }
}
