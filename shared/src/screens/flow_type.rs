use chrono::TimeZone;
use std::fmt::Display;

use crate::dates::{format_timestamp, DATE_MINUTE_FORMAT};
use crate::error::CategoryLimitReached;
use crate::forms::FlowTypeForm;
use crate::models::CapitalFlowType;
use crate::screens::list::{ListAction, ListCore, PageView};
use crate::screens::ScreenState;

/// A flow type with its display fields resolved
#[derive(Debug, Clone, PartialEq)]
pub struct FlowTypeRow {
    pub record: CapitalFlowType,
    pub kind_label: &'static str,
    pub color: &'static str,
    pub created_text: String,
    /// `"<kind> - <name>"`, used by the flow screen's selector
    pub option_name: String,
}

impl FlowTypeRow {
    pub fn new<Tz>(record: CapitalFlowType, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            kind_label: record.kind.label(),
            color: record.kind.color(),
            created_text: format_timestamp(record.created_at, tz, DATE_MINUTE_FORMAT),
            option_name: format!("{} - {}", record.kind.label(), record.name),
            record,
        }
    }
}

/// Flow types ordered by kind; order within a kind is the backend's
pub fn build_rows<Tz>(mut types: Vec<CapitalFlowType>, tz: &Tz) -> Vec<FlowTypeRow>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    types.sort_by_key(|flow_type| flow_type.kind);
    types.into_iter().map(|flow_type| FlowTypeRow::new(flow_type, tz)).collect()
}

impl PageView for Vec<FlowTypeRow> {
    fn row_ids(&self) -> Vec<i64> {
        self.iter().map(|row| row.record.id).collect()
    }
}

pub type FlowTypeList = ListCore<Vec<FlowTypeRow>, FlowTypeForm>;

/// Category management: a single unpaged list
#[derive(Debug, Clone, PartialEq)]
pub struct FlowTypeScreen {
    pub list: FlowTypeList,
    max_types: usize,
}

pub type FlowTypeAction = ListAction<Vec<FlowTypeRow>, FlowTypeForm>;

impl FlowTypeScreen {
    /// Screen state at mount, with the first load already requested
    pub fn new(max_types: usize) -> Self {
        let mut list = ListCore::new(u32::MAX);
        list.refresh(true);
        Self { list, max_types }
    }

    pub fn rows(&self) -> &[FlowTypeRow] {
        self.list.load.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn limit_reached(&self) -> Option<CategoryLimitReached> {
        (self.rows().len() >= self.max_types).then_some(CategoryLimitReached { limit: self.max_types })
    }
}

impl ScreenState for FlowTypeScreen {
    type Action = FlowTypeAction;

    fn apply(&mut self, action: FlowTypeAction) {
        match action {
            ListAction::OpenCreate { now } => match self.limit_reached() {
                Some(limit) => self.list.notices.warn(limit.to_string()),
                None => self.list.apply(ListAction::OpenCreate { now }, true),
            },
            action => self.list.apply(action, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FlowTypeField;
    use crate::modal::SubmitRequest;
    use crate::models::{FlowKind, FlowTypePayload};
    use crate::outbox::WriteOutcome;
    use crate::screens::list::{ListCommand, WRITE_IN_FLIGHT};
    use chrono::Utc;

    fn flow_type(id: i64, name: &str, kind: FlowKind) -> CapitalFlowType {
        CapitalFlowType { id, name: name.to_string(), kind, created_at: 1_718_000_000_000 }
    }

    fn loaded(types: Vec<CapitalFlowType>, max_types: usize) -> FlowTypeScreen {
        let mut screen = FlowTypeScreen::new(max_types);
        let generation = screen.list.request_generation().unwrap();
        screen.apply(ListAction::Loaded { generation, view: build_rows(types, &Utc) });
        screen
    }

    #[test]
    fn test_rows_sorted_by_kind() {
        let json = r#"[{"type":2,"name":"Salary","id":1},{"type":1,"name":"Snacks","id":2}]"#;
        let types: Vec<CapitalFlowType> = serde_json::from_str(json).unwrap();
        let rows = build_rows(types, &Utc);
        let names: Vec<&str> = rows.iter().map(|row| row.record.name.as_str()).collect();
        assert_eq!(names, vec!["Snacks", "Salary"]);
        assert_eq!(rows[0].option_name, "Expense - Snacks");
        assert_eq!(rows[1].kind_label, "Income");
    }

    #[test]
    fn test_sort_is_stable_within_kind() {
        let rows = build_rows(
            vec![
                flow_type(1, "B", FlowKind::Income),
                flow_type(2, "Z", FlowKind::Expense),
                flow_type(3, "A", FlowKind::Income),
                flow_type(4, "Y", FlowKind::Expense),
            ],
            &Utc,
        );
        let ids: Vec<i64> = rows.iter().map(|row| row.record.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
        assert_eq!(rows[0].created_text, "2024-06-10 06:13");
    }

    #[test]
    fn test_new_screen_requests_first_load() {
        let screen = FlowTypeScreen::new(100);
        assert_eq!(screen.list.request_generation(), Some(1));
        assert!(screen.rows().is_empty());
    }

    #[test]
    fn test_create_rejected_at_limit() {
        let types = (0..100).map(|id| flow_type(id, "t", FlowKind::Expense)).collect();
        let mut screen = loaded(types, 100);
        screen.apply(ListAction::OpenCreate { now: 0 });
        assert!(!screen.list.modal.is_open());
        assert_eq!(screen.list.notices.current().unwrap().text, "You can keep at most 100 flow types");

        // Editing is still allowed
        screen.apply(ListAction::OpenEdit { record: flow_type(3, "t", FlowKind::Expense) });
        assert!(screen.list.modal.is_open());
    }

    #[test]
    fn test_create_allowed_below_limit() {
        let types = (0..99).map(|id| flow_type(id, "t", FlowKind::Expense)).collect();
        let mut screen = loaded(types, 100);
        screen.apply(ListAction::OpenCreate { now: 0 });
        assert!(screen.list.modal.is_open());
        assert!(screen.list.notices.current().is_none());
    }

    #[test]
    fn test_empty_name_warns_once_and_sends_nothing() {
        let mut screen = loaded(vec![], 100);
        screen.apply(ListAction::OpenCreate { now: 0 });
        screen.apply(ListAction::Submit);
        assert_eq!(screen.list.outbox.pending(), None);
        assert_eq!(screen.list.notices.issued(), 1);
        assert_eq!(screen.list.notices.current().unwrap().text, "Name cannot be empty");
        assert!(!screen.list.modal.is_submitting());
    }

    #[test]
    fn test_successful_create_closes_and_reloads_once() {
        let mut screen = loaded(vec![], 100);
        screen.apply(ListAction::OpenCreate { now: 0 });
        screen.apply(ListAction::Edit(FlowTypeField::Name("Snacks".to_string())));
        screen.apply(ListAction::Submit);

        let ticket = screen.list.outbox.pending().cloned().unwrap();
        assert_eq!(
            ticket.command,
            ListCommand::Save(SubmitRequest::Create(FlowTypePayload { name: "Snacks".to_string(), kind: FlowKind::Expense }))
        );
        let generation_before = screen.list.generation();
        screen.apply(ListAction::WriteFinished { id: ticket.id, outcome: WriteOutcome::Succeeded });

        assert!(!screen.list.modal.is_open());
        assert_eq!(screen.list.generation(), generation_before + 1);
        assert_eq!(screen.list.request_generation(), Some(generation_before + 1));

        // Duplicate completion is ignored
        screen.apply(ListAction::WriteFinished { id: ticket.id, outcome: WriteOutcome::Succeeded });
        assert_eq!(screen.list.generation(), generation_before + 1);
    }

    #[test]
    fn test_rejected_save_keeps_modal_open() {
        let mut screen = loaded(vec![flow_type(8, "Food", FlowKind::Expense)], 100);
        screen.apply(ListAction::OpenEdit { record: flow_type(8, "Food", FlowKind::Expense) });
        screen.apply(ListAction::Submit);
        assert!(screen.list.modal.is_submitting());
        let id = screen.list.outbox.pending_id().unwrap();
        let generation_before = screen.list.generation();

        screen.apply(ListAction::WriteFinished { id, outcome: WriteOutcome::Rejected });
        assert!(screen.list.modal.is_open());
        assert!(!screen.list.modal.is_submitting());
        assert_eq!(screen.list.generation(), generation_before);
        assert!(screen.list.notices.current().is_none());
    }

    #[test]
    fn test_batch_delete_of_selection() {
        let mut screen = loaded(
            vec![flow_type(1, "a", FlowKind::Expense), flow_type(2, "b", FlowKind::Income)],
            100,
        );
        screen.apply(ListAction::DeleteSelected);
        assert_eq!(screen.list.confirm, None);

        screen.apply(ListAction::ToggleSelected(2));
        screen.apply(ListAction::ToggleSelected(1));
        screen.apply(ListAction::DeleteSelected);
        assert_eq!(screen.list.confirm, Some(vec![1, 2]));

        screen.apply(ListAction::ConfirmDelete);
        let ticket = screen.list.outbox.pending().cloned().unwrap();
        assert_eq!(ticket.command, ListCommand::Delete(vec![1, 2]));

        screen.apply(ListAction::WriteFinished { id: ticket.id, outcome: WriteOutcome::Succeeded });
        assert!(screen.list.selected.is_empty());
        assert!(screen.list.load.is_loading());
    }

    #[test]
    fn test_confirm_while_write_in_flight_keeps_ids() {
        let mut screen = loaded(
            vec![flow_type(1, "a", FlowKind::Expense), flow_type(2, "b", FlowKind::Income)],
            100,
        );
        screen.apply(ListAction::RequestDelete(vec![1]));
        screen.apply(ListAction::ConfirmDelete);
        let first = screen.list.outbox.pending().cloned().unwrap();

        screen.apply(ListAction::RequestDelete(vec![2]));
        screen.apply(ListAction::ConfirmDelete);
        assert_eq!(screen.list.outbox.pending(), Some(&first));
        assert_eq!(screen.list.confirm, Some(vec![2]));
        assert_eq!(screen.list.notices.current().unwrap().text, WRITE_IN_FLIGHT);

        // Once the first delete settles the kept ids can be confirmed
        screen.apply(ListAction::WriteFinished { id: first.id, outcome: WriteOutcome::Succeeded });
        screen.apply(ListAction::ConfirmDelete);
        assert_eq!(screen.list.confirm, None);
        assert_eq!(screen.list.outbox.pending().unwrap().command, ListCommand::Delete(vec![2]));
    }

    #[test]
    fn test_submit_while_delete_in_flight_warns() {
        let mut screen = loaded(vec![flow_type(1, "a", FlowKind::Expense)], 100);
        screen.apply(ListAction::RequestDelete(vec![1]));
        screen.apply(ListAction::ConfirmDelete);
        let pending = screen.list.outbox.pending().cloned();

        screen.apply(ListAction::OpenCreate { now: 0 });
        screen.apply(ListAction::Edit(FlowTypeField::Name("Snacks".to_string())));
        screen.apply(ListAction::Submit);
        assert_eq!(screen.list.outbox.pending().cloned(), pending);
        assert!(screen.list.modal.is_open());
        assert!(!screen.list.modal.is_submitting());
        assert_eq!(screen.list.notices.current().unwrap().text, WRITE_IN_FLIGHT);
    }

    #[test]
    fn test_selection_pruned_after_reload() {
        let mut screen = loaded(vec![flow_type(1, "a", FlowKind::Expense)], 100);
        screen.apply(ListAction::ToggleSelected(1));
        screen.apply(ListAction::Reload);
        let generation = screen.list.request_generation().unwrap();
        screen.apply(ListAction::Loaded { generation, view: vec![] });
        assert!(screen.list.selected.is_empty());
    }
}
