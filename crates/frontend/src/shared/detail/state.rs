//! Detail dialog lifecycle: `Closed → Opening(id) → Open(id, record?) → Closed`

use serde_json::Value;

use crate::shared::api::ApiError;
use crate::shared::list::RowId;

#[derive(Debug, Clone, PartialEq)]
pub enum DialogPhase {
    Closed,
    Opening { id: RowId },
    /// `record` is `None` when the fetch failed
    Open { id: RowId, record: Option<Value> },
}

/// Issued by `open`; a resolution carrying an outdated ticket is dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    generation: u64,
    pub id: RowId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    phase: DialogPhase,
    active_tab: usize,
    tab_count: usize,
    generation: u64,
}

impl DetailState {
    pub fn new(tab_count: usize) -> Self {
        Self {
            phase: DialogPhase::Closed,
            active_tab: 0,
            tab_count,
            generation: 0,
        }
    }

    pub fn phase(&self) -> &DialogPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.phase, DialogPhase::Closed)
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.phase, DialogPhase::Opening { .. })
    }

    pub fn current_id(&self) -> Option<&RowId> {
        match &self.phase {
            DialogPhase::Closed => None,
            DialogPhase::Opening { id } | DialogPhase::Open { id, .. } => Some(id),
        }
    }

    pub fn record(&self) -> Option<&Value> {
        match &self.phase {
            DialogPhase::Open { record, .. } => record.as_ref(),
            _ => None,
        }
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    /// Start showing `id`. Returns the ticket for the single `GET`, or `None`
    /// when the same id is already shown.
    pub fn open(&mut self, id: RowId) -> Option<DetailTicket> {
        if self.current_id() == Some(&id) {
            return None;
        }
        self.generation += 1;
        self.active_tab = 0;
        self.phase = DialogPhase::Opening { id: id.clone() };
        Some(DetailTicket {
            generation: self.generation,
            id,
        })
    }

    /// Apply the fetch result; `false` when the ticket is stale
    pub fn resolve(&mut self, ticket: DetailTicket, result: Result<Value, ApiError>) -> bool {
        if ticket.generation != self.generation || !self.is_fetching() {
            log::debug!("dropping stale detail response for {}", ticket.id);
            return false;
        }
        let record = match result {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("detail {} not loaded: {}", ticket.id, e);
                None
            }
        };
        self.phase = DialogPhase::Open {
            id: ticket.id,
            record,
        };
        true
    }

    /// Switch the visible pane; never fetches
    pub fn select_tab(&mut self, index: usize) -> bool {
        if !self.is_open() || index >= self.tab_count {
            return false;
        }
        self.active_tab = index;
        true
    }

    pub fn close(&mut self) {
        self.phase = DialogPhase::Closed;
        self.active_tab = 0;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_open_resolve_close_cycle() {
        let mut state = DetailState::new(3);
        let ticket = state.open(RowId::from(7i64)).expect("ticket");
        assert!(state.is_fetching());
        assert_eq!(state.record(), None);

        assert!(state.resolve(ticket, Ok(json!({"id": 7}))));
        assert_eq!(state.record(), Some(&json!({"id": 7})));

        assert!(state.select_tab(2));
        state.close();
        assert!(!state.is_open());
        assert_eq!(state.active_tab(), 0);
        assert_eq!(state.record(), None);
    }

    #[test]
    fn test_reopening_the_shown_id_is_a_noop() {
        let mut state = DetailState::new(2);
        let ticket = state.open(RowId::from(7i64)).expect("ticket");
        assert!(state.open(RowId::from(7i64)).is_none());
        state.resolve(ticket, Ok(json!({})));
        assert!(state.open(RowId::from(7i64)).is_none());
    }

    #[test]
    fn test_response_after_close_is_dropped() {
        let mut state = DetailState::new(2);
        let ticket = state.open(RowId::from(7i64)).expect("ticket");
        state.close();
        assert!(!state.resolve(ticket, Ok(json!({"id": 7}))));
        assert_eq!(state.phase(), &DialogPhase::Closed);
    }

    #[test]
    fn test_response_for_previous_id_is_dropped() {
        let mut state = DetailState::new(2);
        let first = state.open(RowId::from(7i64)).expect("ticket");
        let second = state.open(RowId::from(9i64)).expect("ticket");
        assert!(!state.resolve(first, Ok(json!({"id": 7}))));
        assert!(state.resolve(second, Ok(json!({"id": 9}))));
        assert_eq!(state.current_id(), Some(&RowId::from(9i64)));
    }

    #[test]
    fn test_failed_fetch_opens_without_record() {
        let mut state = DetailState::new(2);
        let ticket = state.open(RowId::from(7i64)).expect("ticket");
        assert!(state.resolve(ticket, Err(ApiError::Status(500))));
        assert!(state.is_open());
        assert!(!state.is_fetching());
        assert_eq!(state.record(), None);
    }

    #[test]
    fn test_tab_selection_is_bounded() {
        let mut state = DetailState::new(2);
        assert!(!state.select_tab(1), "closed dialog has no tabs");
        state.open(RowId::from(1i64));
        assert!(state.select_tab(1));
        assert!(!state.select_tab(2));
        assert_eq!(state.active_tab(), 1);
    }
}
