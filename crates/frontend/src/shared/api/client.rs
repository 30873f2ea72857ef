use contracts::shared::api_response::{ErrorResponse, MessageResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use super::transport::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// Thin JSON client: joins paths to the base URL, attaches the bearer
/// credential and turns non-2xx bodies into [`ApiError`].
#[derive(Debug, Clone)]
pub struct ApiClient<T = GlooTransport> {
    transport: T,
    base_url: String,
    token: Option<String>,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Authenticated `GET`, body returned as raw JSON
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        self.get(path).await
    }

    /// Authenticated `GET`, body decoded into `D`
    pub async fn get<D: DeserializeOwned>(&self, path: &str) -> Result<D, ApiError> {
        let body = self.send_authenticated(HttpMethod::Get, path, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Authenticated `DELETE`, expects `{ "message": "..." }`
    pub async fn delete(&self, path: &str) -> Result<MessageResponse, ApiError> {
        let body = self.send_authenticated(HttpMethod::Delete, path, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Unauthenticated `POST` (login)
    pub async fn post_public<B, D>(&self, path: &str, payload: &B) -> Result<D, ApiError>
    where
        B: Serialize,
        D: DeserializeOwned,
    {
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: self.url(path),
            bearer: None,
            body: Some(serde_json::to_string(payload)?),
        };
        let response = self.transport.send(request).await?;
        let body = into_body(response)?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_authenticated(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let token = self.token.clone().ok_or(ApiError::Unauthenticated)?;
        let request = HttpRequest {
            method,
            url: self.url(path),
            bearer: Some(token),
            body,
        };
        log::debug!("{:?} {}", request.method, request.url);
        let response = self.transport.send(request).await?;
        into_body(response)
    }
}

/// Accept 2xx bodies; map everything else onto the error taxonomy
pub fn into_body(response: HttpResponse) -> Result<String, ApiError> {
    if response.is_success() {
        return Ok(response.body);
    }
    if response.status == 401 {
        return Err(ApiError::Unauthenticated);
    }
    match serde_json::from_str::<ErrorResponse>(&response.body) {
        Ok(err) => Err(ApiError::Application(err.error)),
        Err(_) => Err(ApiError::Status(response.status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::mock::MockTransport;
    use futures::executor::block_on;

    fn client(mock: MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(mock, "http://api.test/", Some("tok".to_string()))
    }

    #[test]
    fn test_get_attaches_bearer_and_joins_url() {
        let mock = MockTransport::new();
        mock.respond(200, r#"{"clientes":[]}"#);
        let api = client(mock);

        let value = block_on(api.get_json("/api/clientes")).unwrap();
        assert_eq!(value["clientes"], serde_json::json!([]));

        let sent = api.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert_eq!(sent[0].url, "http://api.test/api/clientes");
        assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
    }

    #[test]
    fn test_missing_token_makes_no_request() {
        let api = ApiClient::new(MockTransport::new(), "http://api.test", None);
        let err = block_on(api.get_json("/api/clientes")).unwrap_err();
        assert_eq!(err, ApiError::Unauthenticated);
        assert!(api.transport().requests().is_empty());
    }

    #[test]
    fn test_error_body_becomes_application_error() {
        let mock = MockTransport::new();
        mock.respond(409, r#"{"error":"El cliente tiene ventas"}"#);
        let api = client(mock);
        let err = block_on(api.delete("/api/clientes/42/delete")).unwrap_err();
        assert_eq!(err, ApiError::Application("El cliente tiene ventas".to_string()));
    }

    #[test]
    fn test_unreadable_error_body_keeps_status() {
        let mock = MockTransport::new();
        mock.respond(502, "<html>Bad Gateway</html>");
        let api = client(mock);
        let err = block_on(api.get_json("/api/ventas")).unwrap_err();
        assert_eq!(err, ApiError::Status(502));
    }

    #[test]
    fn test_401_is_unauthenticated() {
        let mock = MockTransport::new();
        mock.respond(401, r#"{"error":"token expirado"}"#);
        let api = client(mock);
        let err = block_on(api.get_json("/api/ventas")).unwrap_err();
        assert!(err.is_unauthenticated());
    }

    #[test]
    fn test_transport_failure_propagates() {
        let mock = MockTransport::new();
        mock.fail("Failed to fetch");
        let api = client(mock);
        let err = block_on(api.get_json("/api/ventas")).unwrap_err();
        assert_eq!(err, ApiError::Transport("Failed to fetch".to_string()));
    }
}
