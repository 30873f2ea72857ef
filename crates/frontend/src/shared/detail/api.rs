use serde_json::Value;

use crate::shared::api::{ApiClient, ApiError, HttpTransport};
use crate::shared::api_utils::record_path;
use crate::shared::list::RowId;

/// `GET {endpoint}/{id}`, the full record as JSON
pub async fn fetch_record<T: HttpTransport>(
    client: &ApiClient<T>,
    endpoint: &str,
    id: &RowId,
) -> Result<Value, ApiError> {
    let record = client.get_json(&record_path(endpoint, id.as_str())).await?;
    log::debug!("{}: record {} loaded", endpoint, id);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::mock::MockTransport;
    use crate::shared::detail::state::DetailState;
    use futures::executor::block_on;
    use serde_json::json;

    fn setup() -> (MockTransport, ApiClient<MockTransport>, DetailState) {
        let mock = MockTransport::new();
        let client = ApiClient::new(mock.clone(), "http://api.test", Some("tok".into()));
        (mock, client, DetailState::new(3))
    }

    /// What the dialog does on `open`: fetch only when a ticket is issued
    fn open(state: &mut DetailState, client: &ApiClient<MockTransport>, id: i64) {
        if let Some(ticket) = state.open(RowId::from(id)) {
            let result = block_on(fetch_record(client, "/api/ventas", &ticket.id));
            state.resolve(ticket, result);
        }
    }

    #[test]
    fn test_open_fetches_record_once() {
        let (mock, client, mut state) = setup();
        mock.respond(200, r#"{"id":7,"numero":"V-7"}"#);

        open(&mut state, &client, 7);
        open(&mut state, &client, 7);

        let sent = mock.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://api.test/api/ventas/7");
        assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
        assert_eq!(state.record(), Some(&json!({"id": 7, "numero": "V-7"})));
    }

    #[test]
    fn test_reopen_after_close_fetches_new_record() {
        let (mock, client, mut state) = setup();
        mock.respond(200, r#"{"id":7}"#);
        mock.respond(200, r#"{"id":9}"#);

        open(&mut state, &client, 7);
        state.close();
        open(&mut state, &client, 9);

        let sent = mock.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].url, "http://api.test/api/ventas/9");
        assert_eq!(state.record(), Some(&json!({"id": 9})));
    }

    #[test]
    fn test_switching_tabs_sends_no_requests() {
        let (mock, client, mut state) = setup();
        mock.respond(200, r#"{"id":7}"#);
        open(&mut state, &client, 7);

        assert!(state.select_tab(1));
        assert!(state.select_tab(2));
        assert!(state.select_tab(0));
        assert_eq!(mock.requests().len(), 1);
    }

    #[test]
    fn test_failed_fetch_leaves_dialog_open_without_record() {
        let (mock, client, mut state) = setup();
        mock.respond(404, r#"{"error":"Venta no encontrada"}"#);
        open(&mut state, &client, 7);

        assert!(state.is_open());
        assert_eq!(state.record(), None);
    }
}
