use std::collections::BTreeSet;

use crate::modal::{EditModal, RecordForm, SubmitRequest};
use crate::models::Timestamp;
use crate::outbox::{Notices, Outbox, WriteOutcome};
use crate::table::{LoadState, TableChange, TableState};

pub const WRITE_IN_FLIGHT: &str = "Another change is still being saved, please try again";

/// A rendered page that knows which record ids it shows
pub trait PageView {
    fn row_ids(&self) -> Vec<i64>;
}

/// Writes a list screen can queue
#[derive(Debug, Clone, PartialEq)]
pub enum ListCommand<P> {
    Save(SubmitRequest<P>),
    Delete(Vec<i64>),
}

/// Interactions every list screen supports
pub enum ListAction<V, F: RecordForm> {
    /// Re-issue the current query
    Reload,
    TableChanged(TableChange),
    Loaded { generation: u64, view: V },
    LoadFailed { generation: u64 },
    ToggleSelected(i64),
    /// Ask for confirmation before deleting `ids`
    RequestDelete(Vec<i64>),
    /// Ask to delete every selected row
    DeleteSelected,
    ConfirmDelete,
    CancelDelete,
    OpenCreate { now: Timestamp },
    OpenEdit { record: F::Record },
    Edit(F::Field),
    Submit,
    CancelModal,
    WriteFinished { id: u64, outcome: WriteOutcome },
    DismissNotice(u64),
}

/// The table, modal, confirmation and write queue of one screen
#[derive(Debug, Clone, PartialEq)]
pub struct ListCore<V, F: RecordForm> {
    pub table: TableState,
    pub load: LoadState<V>,
    pub modal: EditModal<F>,
    pub selected: BTreeSet<i64>,
    /// Ids waiting for the user to confirm deletion
    pub confirm: Option<Vec<i64>>,
    pub outbox: Outbox<ListCommand<F::Payload>>,
    pub notices: Notices,
    generation: u64,
}

impl<V: PageView, F: RecordForm> ListCore<V, F> {
    pub fn new(page_size: u32) -> Self {
        Self {
            table: TableState::new(page_size),
            load: LoadState::Idle,
            modal: EditModal::Closed,
            selected: BTreeSet::new(),
            confirm: None,
            outbox: Outbox::default(),
            notices: Notices::default(),
            generation: 0,
        }
    }

    /// Start a new query generation. With `can_fetch` false (incomplete
    /// filters) the table goes idle instead, which also orphans any load
    /// still in flight.
    pub fn refresh(&mut self, can_fetch: bool) {
        self.generation += 1;
        if can_fetch {
            self.load.begin(self.generation);
        } else {
            self.load.reset();
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Generation whose request still has to be sent, if any
    pub fn request_generation(&self) -> Option<u64> {
        self.load.pending_generation().filter(|generation| *generation == self.generation)
    }

    pub fn apply(&mut self, action: ListAction<V, F>, can_fetch: bool) {
        match action {
            ListAction::Reload => self.refresh(can_fetch),
            ListAction::TableChanged(change) => {
                self.table.apply(change);
                self.refresh(can_fetch);
            }
            ListAction::Loaded { generation, view } => {
                let ids = view.row_ids();
                if self.load.complete(generation, view) {
                    self.selected.retain(|id| ids.contains(id));
                }
            }
            ListAction::LoadFailed { generation } => {
                self.load.fail(generation);
            }
            ListAction::ToggleSelected(id) => {
                if !self.selected.remove(&id) {
                    self.selected.insert(id);
                }
            }
            ListAction::RequestDelete(ids) => {
                if !ids.is_empty() {
                    self.confirm = Some(ids);
                }
            }
            ListAction::DeleteSelected => {
                let ids: Vec<i64> = self.selected.iter().copied().collect();
                self.apply(ListAction::RequestDelete(ids), can_fetch);
            }
            ListAction::ConfirmDelete => {
                // The dialog stays open while another write is in flight
                if let Some(ids) = self.confirm.clone() {
                    if self.outbox.push(ListCommand::Delete(ids)).is_some() {
                        self.confirm = None;
                    } else {
                        self.notices.warn(WRITE_IN_FLIGHT);
                    }
                }
            }
            ListAction::CancelDelete => self.confirm = None,
            ListAction::OpenCreate { now } => self.modal.open_with(None, now),
            ListAction::OpenEdit { record } => self.modal.open_with(Some(&record), 0),
            ListAction::Edit(field) => self.modal.edit(field),
            ListAction::Submit => match self.modal.submit() {
                Ok(Some(request)) => {
                    if self.outbox.push(ListCommand::Save(request)).is_none() {
                        self.modal.finish_submit();
                        self.notices.warn(WRITE_IN_FLIGHT);
                    }
                }
                Ok(None) => {}
                Err(error) => self.notices.warn(error.to_string()),
            },
            ListAction::CancelModal => self.modal.close(),
            ListAction::WriteFinished { id, outcome } => match self.outbox.settle(id) {
                Some(ListCommand::Save(_)) => {
                    if outcome == WriteOutcome::Succeeded {
                        self.modal.close();
                        self.refresh(can_fetch);
                    } else {
                        self.modal.finish_submit();
                    }
                }
                Some(ListCommand::Delete(ids)) => {
                    if outcome == WriteOutcome::Succeeded {
                        self.selected.retain(|id| !ids.contains(id));
                        self.refresh(can_fetch);
                    }
                }
                None => {}
            },
            ListAction::DismissNotice(id) => self.notices.dismiss(id),
        }
    }
}
