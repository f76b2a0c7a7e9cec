use chrono::{NaiveDate, TimeZone};
use serde::Serialize;
use std::fmt::Display;

use crate::config::AppConfig;
use crate::dates::{format_timestamp, DateRange, DateSelection, QuickRange, DATE_MINUTE_FORMAT, ONE_DAY_MILLIS};
use crate::forms::CapitalFlowForm;
use crate::models::{CapitalFlowPage, CapitalFlowRecord, FlowKind};
use crate::screens::flow_type::FlowTypeRow;
use crate::screens::list::{ListAction, ListCore, PageView};
use crate::screens::{query_pairs, ScreenState};

/// Column key of the amount column
pub const PRICE_COLUMN: &str = "price";
/// Column filter value that masks every amount
pub const HIDE_AMOUNT: &str = "hide";
pub const MASKED_AMOUNT: &str = "******";

/// Query panel of the flow screen
#[derive(Debug, Clone, PartialEq)]
pub struct FlowFilters {
    pub date: DateSelection,
    pub keyword: String,
    /// Selected flow type, `None` for all
    pub type_name_id: Option<i64>,
    /// Only offered (and sent) while no flow type is selected
    pub kind: Option<FlowKind>,
}

impl FlowFilters {
    /// First to last day of the current month, everything else cleared
    pub fn defaults(today: NaiveDate) -> Self {
        Self { date: DateRange::month_of(today).into(), keyword: String::new(), type_name_id: None, kind: None }
    }

    /// Kind filter as it applies to the query
    pub fn effective_kind(&self) -> Option<FlowKind> {
        self.kind.filter(|_| self.type_name_id.is_none())
    }
}

/// Query string of `GET /api/capitalFlow`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowQuery {
    pub page_no: u32,
    pub page_size: u32,
    pub keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name_id: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FlowKind>,
    pub start_date: i64,
    /// One day past local midnight of the last selected day
    pub end_date: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl FlowQuery {
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        query_pairs(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowRow {
    /// 1-based position on the current page
    pub order: usize,
    pub record: CapitalFlowRecord,
    pub date_text: String,
    /// Amount prefixed with the kind's sign
    pub price_text: String,
    pub color: &'static str,
}

impl FlowRow {
    pub fn amount_text(&self, hidden: bool) -> &str {
        if hidden {
            MASKED_AMOUNT
        } else {
            &self.price_text
        }
    }
}

/// Sums over the whole filter, not just the visible page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlowTotals {
    pub income: f64,
    pub consumption: f64,
    pub available: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowPageView {
    pub rows: Vec<FlowRow>,
    pub count: u64,
    pub totals: FlowTotals,
}

impl PageView for FlowPageView {
    fn row_ids(&self) -> Vec<i64> {
        self.rows.iter().map(|row| row.record.id).collect()
    }
}

pub fn build_page<Tz>(page: CapitalFlowPage, tz: &Tz) -> FlowPageView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let rows = page
        .rows
        .into_iter()
        .enumerate()
        .map(|(idx, record)| FlowRow {
            order: idx + 1,
            date_text: format_timestamp(record.date, tz, DATE_MINUTE_FORMAT),
            price_text: format!("{}{}", record.kind.symbol(), record.price),
            color: record.kind.color(),
            record,
        })
        .collect();
    FlowPageView {
        rows,
        count: page.count,
        totals: FlowTotals { income: page.income, consumption: page.consumption, available: page.available },
    }
}

pub type FlowList = ListCore<FlowPageView, CapitalFlowForm>;

#[derive(Debug, Clone, PartialEq)]
pub struct CapitalFlowScreen {
    pub filters: FlowFilters,
    pub list: FlowList,
    /// Options of the flow type selector, ordered by kind
    pub categories: Vec<FlowTypeRow>,
    max_keyword_len: usize,
}

pub enum FlowAction {
    Reset { today: NaiveDate },
    SetDate(DateSelection),
    ApplyQuickRange { range: QuickRange, today: NaiveDate },
    SetCategory(Option<i64>),
    SetKind(Option<FlowKind>),
    /// Typing in the search box; nothing is fetched until `Search`
    SetKeyword(String),
    Search,
    CategoriesLoaded(Vec<FlowTypeRow>),
    List(ListAction<FlowPageView, CapitalFlowForm>),
}

impl CapitalFlowScreen {
    /// Screen state at mount: current month, first page requested
    pub fn new(config: &AppConfig, today: NaiveDate) -> Self {
        let mut screen = Self {
            filters: FlowFilters::defaults(today),
            list: ListCore::new(config.page_size),
            categories: Vec::new(),
            max_keyword_len: config.max_keyword_len,
        };
        screen.list.refresh(screen.can_fetch());
        screen
    }

    pub fn can_fetch(&self) -> bool {
        self.filters.date.range().is_some()
    }

    pub fn is_amount_hidden(&self) -> bool {
        self.list.table.filters.is_active(PRICE_COLUMN, HIDE_AMOUNT)
    }

    pub fn totals(&self) -> FlowTotals {
        self.list.load.data().map(|view| view.totals).unwrap_or_default()
    }

    /// The request still to be sent, tagged with its generation
    pub fn query<Tz: TimeZone>(&self, tz: &Tz) -> Option<(u64, FlowQuery)> {
        let generation = self.list.request_generation()?;
        let range = self.filters.date.range()?;
        let table = &self.list.table;
        let query = FlowQuery {
            page_no: table.pagination.page_no,
            page_size: table.pagination.page_size,
            keyword: self.filters.keyword.trim().to_string(),
            type_name_id: self.filters.type_name_id,
            kind: self.filters.effective_kind(),
            start_date: range.start_millis(tz),
            end_date: range.end_millis(tz) + ONE_DAY_MILLIS,
            sort: table.sorter.as_ref().map(|sorter| sorter.to_param()),
        };
        Some((generation, query))
    }

    fn filters_changed(&mut self) {
        self.list.table.rewind();
        self.list.refresh(self.can_fetch());
    }
}

impl ScreenState for CapitalFlowScreen {
    type Action = FlowAction;

    fn apply(&mut self, action: FlowAction) {
        match action {
            FlowAction::Reset { today } => {
                self.filters = FlowFilters::defaults(today);
                self.list.table.sorter = None;
                self.filters_changed();
            }
            FlowAction::SetDate(date) => {
                self.filters.date = date;
                self.filters_changed();
            }
            FlowAction::ApplyQuickRange { range, today } => {
                self.filters.date = range.resolve(today, self.filters.date.start).into();
                self.filters_changed();
            }
            FlowAction::SetCategory(type_name_id) => {
                self.filters.type_name_id = type_name_id;
                self.filters_changed();
            }
            FlowAction::SetKind(kind) => {
                self.filters.kind = kind;
                self.filters_changed();
            }
            FlowAction::SetKeyword(keyword) => {
                self.filters.keyword = keyword.chars().take(self.max_keyword_len).collect();
            }
            FlowAction::Search => self.filters_changed(),
            FlowAction::CategoriesLoaded(categories) => self.categories = categories,
            FlowAction::List(action) => {
                let can_fetch = self.can_fetch();
                self.list.apply(action, can_fetch);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::local_midnight_millis;
    use crate::forms::CapitalFlowField;
    use crate::modal::SubmitRequest;
    use crate::models::CapitalFlowPayload;
    use crate::outbox::WriteOutcome;
    use crate::screens::list::ListCommand;
    use crate::table::SortOrder;
    use chrono::{FixedOffset, Utc};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        day(2024, 6, 10)
    }

    fn screen() -> CapitalFlowScreen {
        CapitalFlowScreen::new(&AppConfig::default(), today())
    }

    fn record(id: i64, kind: FlowKind, price: f64) -> CapitalFlowRecord {
        CapitalFlowRecord {
            id,
            date: 1_718_000_000_000,
            kind,
            price,
            type_name_id: Some(1),
            name: "Food".to_string(),
            remarks: String::new(),
        }
    }

    fn page(records: Vec<CapitalFlowRecord>) -> CapitalFlowPage {
        CapitalFlowPage { count: records.len() as u64, rows: records, income: 100.0, consumption: 40.0, available: 60.0 }
    }

    #[test]
    fn test_defaults_to_current_month() {
        let screen = screen();
        assert_eq!(screen.filters.date.range(), Some(DateRange::new(day(2024, 6, 1), day(2024, 6, 30))));
        let (generation, query) = screen.query(&Utc).unwrap();
        assert_eq!(generation, 1);
        assert_eq!(query.page_no, 1);
        assert_eq!(query.page_size, 20);
        assert_eq!(query.start_date, local_midnight_millis(day(2024, 6, 1), &Utc));
    }

    #[test]
    fn test_end_date_shifted_by_one_day() {
        let mut screen = screen();
        screen.apply(FlowAction::SetDate(DateRange::new(day(2024, 6, 3), day(2024, 6, 10)).into()));
        let plus_eight = FixedOffset::east_opt(8 * 3600).unwrap();
        let (_, query) = screen.query(&plus_eight).unwrap();
        assert_eq!(query.start_date, local_midnight_millis(day(2024, 6, 3), &plus_eight));
        assert_eq!(query.end_date, local_midnight_millis(day(2024, 6, 10), &plus_eight) + ONE_DAY_MILLIS);
    }

    #[test]
    fn test_cleared_date_issues_no_fetch() {
        let mut screen = screen();
        screen.apply(FlowAction::SetDate(DateSelection::new(Some(today()), None)));
        assert!(screen.query(&Utc).is_none());
        assert!(!screen.list.load.is_loading());

        screen.apply(FlowAction::Search);
        assert!(screen.query(&Utc).is_none());
    }

    #[test]
    fn test_kind_only_sent_without_category() {
        let mut screen = screen();
        screen.apply(FlowAction::SetKind(Some(FlowKind::Income)));
        let (_, query) = screen.query(&Utc).unwrap();
        assert_eq!(query.kind, Some(FlowKind::Income));
        assert_eq!(query.type_name_id, None);

        screen.apply(FlowAction::SetCategory(Some(4)));
        let (_, query) = screen.query(&Utc).unwrap();
        assert_eq!(query.kind, None);
        assert_eq!(query.type_name_id, Some(4));

        let pairs = query.to_pairs();
        assert!(pairs.contains(&("typeNameId".to_string(), "4".to_string())));
        assert!(!pairs.iter().any(|(key, _)| key == "type" || key == "sort"));
    }

    #[test]
    fn test_query_pairs_use_backend_names() {
        let mut screen = screen();
        screen.apply(FlowAction::SetKind(Some(FlowKind::Expense)));
        let change = screen.list.table.with_sort_toggled("price");
        screen.apply(FlowAction::List(ListAction::TableChanged(change)));
        let (_, query) = screen.query(&Utc).unwrap();
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("type".to_string(), "1".to_string())));
        assert!(pairs.contains(&("sort".to_string(), "price-asc".to_string())));
        assert!(pairs.contains(&("pageNo".to_string(), "1".to_string())));
        assert!(pairs.contains(&("keyword".to_string(), String::new())));
    }

    #[test]
    fn test_keyword_waits_for_search() {
        let mut screen = screen();
        let generation = screen.list.generation();
        screen.apply(FlowAction::SetKeyword("x".repeat(400)));
        assert_eq!(screen.filters.keyword.len(), 300);
        assert_eq!(screen.list.generation(), generation);

        screen.apply(FlowAction::SetKeyword(" lunch ".to_string()));
        screen.apply(FlowAction::Search);
        assert_eq!(screen.list.generation(), generation + 1);
        let (_, query) = screen.query(&Utc).unwrap();
        assert_eq!(query.keyword, "lunch");
    }

    #[test]
    fn test_filter_change_rewinds_page() {
        let mut screen = screen();
        let change = screen.list.table.with_page(3);
        screen.apply(FlowAction::List(ListAction::TableChanged(change)));
        assert_eq!(screen.query(&Utc).unwrap().1.page_no, 3);

        screen.apply(FlowAction::SetCategory(Some(2)));
        assert_eq!(screen.query(&Utc).unwrap().1.page_no, 1);
    }

    #[test]
    fn test_quick_ranges_step_from_selection() {
        let mut screen = screen();
        screen.apply(FlowAction::ApplyQuickRange { range: QuickRange::PreviousMonth, today: today() });
        assert_eq!(screen.filters.date.range(), Some(DateRange::new(day(2024, 5, 1), day(2024, 5, 31))));
        screen.apply(FlowAction::ApplyQuickRange { range: QuickRange::PreviousMonth, today: today() });
        assert_eq!(screen.filters.date.range(), Some(DateRange::new(day(2024, 4, 1), day(2024, 4, 30))));

        screen.apply(FlowAction::ApplyQuickRange { range: QuickRange::LastSevenDays, today: today() });
        assert_eq!(screen.filters.date.range(), Some(DateRange::new(day(2024, 6, 3), day(2024, 6, 10))));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut screen = screen();
        screen.apply(FlowAction::SetCategory(Some(2)));
        screen.apply(FlowAction::SetKind(Some(FlowKind::Income)));
        screen.apply(FlowAction::SetKeyword("rent".to_string()));
        screen.apply(FlowAction::SetDate(DateSelection::cleared()));
        let change = screen.list.table.with_sort_toggled("date");
        screen.apply(FlowAction::List(ListAction::TableChanged(change)));

        screen.apply(FlowAction::Reset { today: today() });
        assert_eq!(screen.filters, FlowFilters::defaults(today()));
        assert_eq!(screen.list.table.sorter, None);
        assert!(screen.query(&Utc).is_some());
    }

    #[test]
    fn test_page_post_processing() {
        let view = build_page(page(vec![record(5, FlowKind::Expense, 12.5), record(6, FlowKind::Income, 300.0)]), &Utc);
        assert_eq!(view.rows[0].order, 1);
        assert_eq!(view.rows[1].order, 2);
        assert_eq!(view.rows[0].price_text, "-12.5");
        assert_eq!(view.rows[1].price_text, "+300");
        assert_eq!(view.rows[0].color, FlowKind::Expense.color());
        assert_eq!(view.rows[0].date_text, "2024-06-10 06:13");
        assert_eq!(view.totals.available, 60.0);
    }

    #[test]
    fn test_stale_completion_discarded() {
        let mut screen = screen();
        let (first, _) = screen.query(&Utc).unwrap();
        screen.apply(FlowAction::SetKind(Some(FlowKind::Income)));
        let (second, _) = screen.query(&Utc).unwrap();

        let newer = build_page(page(vec![record(2, FlowKind::Income, 5.0)]), &Utc);
        screen.apply(FlowAction::List(ListAction::Loaded { generation: second, view: newer.clone() }));
        let older = build_page(page(vec![record(1, FlowKind::Expense, 9.0)]), &Utc);
        screen.apply(FlowAction::List(ListAction::Loaded { generation: first, view: older }));

        assert_eq!(screen.list.load.data(), Some(&newer));
        assert!(screen.query(&Utc).is_none());
    }

    #[test]
    fn test_amount_hidden_by_column_filter() {
        let mut screen = screen();
        let generation = screen.list.request_generation().unwrap();
        screen.apply(FlowAction::List(ListAction::Loaded {
            generation,
            view: build_page(page(vec![record(1, FlowKind::Expense, 9.0)]), &Utc),
        }));
        assert!(!screen.is_amount_hidden());

        let change = screen.list.table.with_filter_toggled(PRICE_COLUMN, HIDE_AMOUNT);
        screen.apply(FlowAction::List(ListAction::TableChanged(change)));
        assert!(screen.is_amount_hidden());
        let row = &screen.list.load.data().unwrap().rows[0];
        assert_eq!(row.amount_text(screen.is_amount_hidden()), MASKED_AMOUNT);
        assert_eq!(row.amount_text(false), "-9");
    }

    #[test]
    fn test_sort_cycles_to_descending() {
        let mut screen = screen();
        for _ in 0..2 {
            let change = screen.list.table.with_sort_toggled("date");
            screen.apply(FlowAction::List(ListAction::TableChanged(change)));
        }
        assert_eq!(screen.list.table.sorter.as_ref().map(|s| s.order), Some(SortOrder::Descend));
        assert_eq!(screen.query(&Utc).unwrap().1.sort.as_deref(), Some("date-desc"));
    }

    #[test]
    fn test_create_flow_record_then_reload() {
        let mut screen = screen();
        screen.apply(FlowAction::List(ListAction::OpenCreate { now: 1_000 }));
        screen.apply(FlowAction::List(ListAction::Edit(CapitalFlowField::Price("12".to_string()))));
        screen.apply(FlowAction::List(ListAction::Submit));
        assert_eq!(screen.list.notices.current().unwrap().text, "Please choose a flow type");
        assert!(screen.list.outbox.pending().is_none());

        screen.apply(FlowAction::List(ListAction::Edit(CapitalFlowField::TypeNameId(Some(3)))));
        screen.apply(FlowAction::List(ListAction::Submit));
        let ticket = screen.list.outbox.pending().cloned().unwrap();
        assert_eq!(
            ticket.command,
            ListCommand::Save(SubmitRequest::Create(CapitalFlowPayload {
                date: 1_000,
                type_name_id: 3,
                price: 12.0,
                remarks: String::new(),
            }))
        );

        let generation = screen.list.generation();
        screen.apply(FlowAction::List(ListAction::WriteFinished { id: ticket.id, outcome: WriteOutcome::Succeeded }));
        assert!(!screen.list.modal.is_open());
        assert_eq!(screen.query(&Utc).map(|(g, _)| g), Some(generation + 1));
    }

    #[test]
    fn test_delete_row_after_confirmation() {
        let mut screen = screen();
        screen.apply(FlowAction::List(ListAction::RequestDelete(vec![5])));
        screen.apply(FlowAction::List(ListAction::CancelDelete));
        assert!(screen.list.outbox.pending().is_none());

        screen.apply(FlowAction::List(ListAction::RequestDelete(vec![5])));
        screen.apply(FlowAction::List(ListAction::ConfirmDelete));
        let ticket = screen.list.outbox.pending().cloned().unwrap();
        assert_eq!(ticket.command, ListCommand::Delete(vec![5]));

        let generation = screen.list.generation();
        screen.apply(FlowAction::List(ListAction::WriteFinished { id: ticket.id, outcome: WriteOutcome::Failed }));
        assert_eq!(screen.list.generation(), generation);
    }
}
