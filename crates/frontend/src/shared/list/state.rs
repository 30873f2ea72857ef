//! Row set and request bookkeeping of one list instance.
//!
//! Requests themselves are issued by the view; this state only hands out
//! tickets and applies their outcomes, so every rule here runs without a
//! browser.

use std::collections::HashSet;

use super::config::ListConfig;
use super::query::{page_slice, PageSlice, ViewQuery};
use super::row::{Row, RowId};
use crate::shared::api::ApiError;
use crate::shared::notification::Notification;

pub const CANCELLED_MESSAGE: &str = "Acción cancelada";
pub const DELETE_IN_FLIGHT_MESSAGE: &str = "La eliminación de este registro ya está en curso";
pub const CONFIRMATION_PENDING_MESSAGE: &str = "Hay otra eliminación pendiente de confirmación";

/// Handed out by [`ListState::begin_load`]; only the newest one is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTicket {
    pub id: RowId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Row set replaced; carries the new row count
    Replaced(usize),
    /// Previous rows kept
    Failed(Notification),
    /// A newer load was started meanwhile; result dropped
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    rows: Vec<Row>,
    pub query: ViewQuery,
    generation: u64,
    pending_load: Option<u64>,
    deleting: HashSet<RowId>,
    confirming: Option<RowId>,
    is_loaded: bool,
}

impl ListState {
    pub fn new(query: ViewQuery) -> Self {
        Self {
            rows: Vec::new(),
            query,
            generation: 0,
            pending_load: None,
            deleting: HashSet::new(),
            confirming: None,
            is_loaded: false,
        }
    }

    pub fn for_config(config: &ListConfig) -> Self {
        Self::new(ViewQuery::new(config.default_sort.clone(), config.page_size))
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// True while a load or any delete is in flight
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some() || !self.deleting.is_empty()
    }

    pub fn is_deleting(&self, id: &RowId) -> bool {
        self.deleting.contains(id)
    }

    pub fn confirming(&self) -> Option<&RowId> {
        self.confirming.as_ref()
    }

    pub fn page(&self, config: &ListConfig) -> PageSlice {
        page_slice(&self.rows, &config.columns, &self.query)
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.pending_load = Some(self.generation);
        LoadTicket {
            generation: self.generation,
        }
    }

    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Row>, ApiError>,
    ) -> LoadOutcome {
        if self.pending_load != Some(ticket.generation) {
            log::debug!("dropping stale list response #{}", ticket.generation);
            return LoadOutcome::Stale;
        }
        self.pending_load = None;
        match result {
            Ok(rows) => {
                let count = rows.len();
                self.rows = rows;
                self.is_loaded = true;
                LoadOutcome::Replaced(count)
            }
            Err(e) => LoadOutcome::Failed(Notification::error(e.to_string())),
        }
    }

    /// Open the confirmation for `id`. Refused while a delete of the same
    /// row is already in flight, or while another row awaits confirmation;
    /// the refusal comes back as the notice to show.
    pub fn request_delete(&mut self, id: RowId) -> Result<(), Notification> {
        if self.deleting.contains(&id) {
            return Err(Notification::info(DELETE_IN_FLIGHT_MESSAGE));
        }
        match &self.confirming {
            Some(pending) if *pending != id => {
                Err(Notification::info(CONFIRMATION_PENDING_MESSAGE))
            }
            _ => {
                self.confirming = Some(id);
                Ok(())
            }
        }
    }

    pub fn cancel_delete(&mut self) -> Notification {
        self.confirming = None;
        Notification::info(CANCELLED_MESSAGE)
    }

    /// User confirmed: returns the ticket for the `DELETE` request
    pub fn confirm_delete(&mut self) -> Option<DeleteTicket> {
        let id = self.confirming.take()?;
        if !self.deleting.insert(id.clone()) {
            return None;
        }
        Some(DeleteTicket { id })
    }

    /// Apply the backend answer; rows change only on success
    pub fn complete_delete(
        &mut self,
        ticket: DeleteTicket,
        result: Result<String, ApiError>,
    ) -> Notification {
        self.deleting.remove(&ticket.id);
        match result {
            Ok(message) => {
                self.rows.retain(|row| row.id != ticket.id);
                Notification::success(message)
            }
            Err(e) => Notification::error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::query::SortSpec;
    use crate::shared::notification::Severity;

    fn state() -> ListState {
        ListState::new(ViewQuery::new(SortSpec::ascending("name"), 50))
    }

    fn rows(ids: &[i64]) -> Vec<Row> {
        ids.iter().map(|id| Row::new(*id).with("name", format!("n{}", id))).collect()
    }

    fn loaded(ids: &[i64]) -> ListState {
        let mut s = state();
        let t = s.begin_load();
        s.complete_load(t, Ok(rows(ids)));
        s
    }

    #[test]
    fn test_load_replaces_rows() {
        let mut s = state();
        let t = s.begin_load();
        assert!(s.is_loading());
        assert!(s.rows().is_empty());

        assert_eq!(s.complete_load(t, Ok(rows(&[1, 2, 3]))), LoadOutcome::Replaced(3));
        assert!(!s.is_loading());
        assert!(s.is_loaded());
        assert_eq!(s.rows(), rows(&[1, 2, 3]).as_slice());
    }

    #[test]
    fn test_failed_load_keeps_previous_rows() {
        let mut s = loaded(&[1, 2]);
        let t = s.begin_load();
        let outcome = s.complete_load(t, Err(ApiError::Application("Base de datos caída".into())));
        match outcome {
            LoadOutcome::Failed(n) => {
                assert_eq!(n.severity, Severity::Error);
                assert!(n.is_persistent());
                assert!(n.message.contains("Base de datos caída"));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(s.rows(), rows(&[1, 2]).as_slice());
        assert!(!s.is_loading());
    }

    #[test]
    fn test_superseded_load_is_dropped() {
        let mut s = state();
        let first = s.begin_load();
        let second = s.begin_load();
        assert_eq!(s.complete_load(second, Ok(rows(&[9]))), LoadOutcome::Replaced(1));
        assert_eq!(s.complete_load(first, Ok(rows(&[1, 2]))), LoadOutcome::Stale);
        assert_eq!(s.rows(), rows(&[9]).as_slice());
    }

    #[test]
    fn test_confirmed_delete_removes_only_that_row() {
        let mut s = loaded(&[41, 42, 43]);
        s.request_delete(RowId::from(42i64)).unwrap();
        let ticket = s.confirm_delete().unwrap();
        assert!(s.is_loading());
        assert_eq!(s.rows().len(), 3, "no removal before confirmation");

        let n = s.complete_delete(ticket, Ok("Eliminado".to_string()));
        assert_eq!(n, Notification::success("Eliminado"));
        assert!(!n.is_persistent());
        assert_eq!(s.rows(), rows(&[41, 43]).as_slice());
        assert!(!s.is_loading());
    }

    #[test]
    fn test_failed_delete_keeps_rows() {
        let mut s = loaded(&[42]);
        s.request_delete(RowId::from(42i64)).unwrap();
        let ticket = s.confirm_delete().unwrap();
        let n = s.complete_delete(ticket, Err(ApiError::Application("Tiene ventas".into())));
        assert_eq!(n, Notification::error("Tiene ventas"));
        assert_eq!(s.rows().len(), 1);
    }

    #[test]
    fn test_cancel_issues_no_ticket() {
        let mut s = loaded(&[42]);
        s.request_delete(RowId::from(42i64)).unwrap();
        let n = s.cancel_delete();
        assert_eq!(n.message, CANCELLED_MESSAGE);
        assert_eq!(n.severity, crate::shared::notification::Severity::Info);
        assert_eq!(s.confirm_delete(), None);
        assert_eq!(s.rows().len(), 1);
        assert!(!s.is_loading());
    }

    #[test]
    fn test_same_row_cannot_be_deleted_twice_concurrently() {
        let mut s = loaded(&[42, 43]);
        s.request_delete(RowId::from(42i64)).unwrap();
        let first = s.confirm_delete().unwrap();
        assert_eq!(
            s.request_delete(RowId::from(42i64)),
            Err(Notification::info(DELETE_IN_FLIGHT_MESSAGE))
        );

        // a different row may overlap
        s.request_delete(RowId::from(43i64)).unwrap();
        let second = s.confirm_delete().unwrap();
        assert!(s.is_deleting(&RowId::from(42i64)) && s.is_deleting(&RowId::from(43i64)));

        s.complete_delete(first, Ok("Eliminado".into()));
        assert!(s.is_loading());
        s.complete_delete(second, Ok("Eliminado".into()));
        assert!(!s.is_loading());
        assert!(s.rows().is_empty());
    }

    #[test]
    fn test_second_delete_request_while_confirming_is_refused() {
        let mut s = loaded(&[42, 43]);
        s.request_delete(RowId::from(42i64)).unwrap();

        let refused = s.request_delete(RowId::from(43i64)).unwrap_err();
        assert_eq!(refused, Notification::info(CONFIRMATION_PENDING_MESSAGE));
        assert_eq!(s.confirming(), Some(&RowId::from(42i64)));

        // asking again for the same row keeps the open confirmation
        s.request_delete(RowId::from(42i64)).unwrap();
        let ticket = s.confirm_delete().unwrap();
        assert_eq!(ticket.id, RowId::from(42i64));

        // once resolved, the other row can be asked for
        s.request_delete(RowId::from(43i64)).unwrap();
        assert_eq!(s.confirming(), Some(&RowId::from(43i64)));
    }

    #[test]
    fn test_reload_allowed_while_delete_in_flight() {
        let mut s = loaded(&[41, 42]);
        s.request_delete(RowId::from(42i64)).unwrap();
        let delete = s.confirm_delete().unwrap();
        assert!(s.is_loading());

        let stale = s.begin_load();
        let fresh = s.begin_load();
        assert_eq!(s.complete_load(fresh, Ok(rows(&[41, 42, 44]))), LoadOutcome::Replaced(3));
        assert_eq!(s.complete_load(stale, Ok(rows(&[41]))), LoadOutcome::Stale);
        assert!(s.is_deleting(&RowId::from(42i64)));
        assert!(s.is_loading(), "the delete is still pending");

        s.complete_delete(delete, Ok("Eliminado".into()));
        assert!(!s.is_loading());
        assert_eq!(s.rows(), rows(&[41, 44]).as_slice());
    }
}
