use chrono::{NaiveDate, TimeZone};
use serde::Serialize;
use std::fmt::Display;

use crate::config::AppConfig;
use crate::dates::{format_timestamp, DateRange, DateSelection, DATE_SECOND_FORMAT};
use crate::forms::ReminderForm;
use crate::models::{ReminderPage, ReminderRecord, ReminderStatus, UserInfo};
use crate::screens::list::{ListAction, ListCore, PageView};
use crate::screens::{query_pairs, ScreenState};

#[derive(Debug, Clone, PartialEq)]
pub struct ReminderFilters {
    pub date: DateSelection,
    /// `None` shows every status
    pub status: Option<ReminderStatus>,
}

impl ReminderFilters {
    /// The whole current year, any status
    pub fn defaults(today: NaiveDate) -> Self {
        Self { date: DateRange::year_of(today).into(), status: None }
    }
}

/// Query string of `GET /api/reminder`. Unlike the flow query, the end
/// bound is the last day's midnight as is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderQuery {
    pub page_no: u32,
    pub page_size: u32,
    pub start_date: i64,
    pub end_date: i64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub status: Option<ReminderStatus>,
}

impl ReminderQuery {
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        query_pairs(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReminderRow {
    pub order: usize,
    pub record: ReminderRecord,
    pub date_text: String,
    pub status_label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReminderPageView {
    pub rows: Vec<ReminderRow>,
    pub count: u64,
}

impl PageView for ReminderPageView {
    fn row_ids(&self) -> Vec<i64> {
        self.rows.iter().map(|row| row.record.id).collect()
    }
}

pub fn build_page<Tz>(page: ReminderPage, tz: &Tz) -> ReminderPageView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let rows = page
        .rows
        .into_iter()
        .enumerate()
        .map(|(idx, record)| ReminderRow {
            order: idx + 1,
            date_text: format_timestamp(record.date, tz, DATE_SECOND_FORMAT),
            status_label: record.status.label(),
            color: record.status.color(),
            record,
        })
        .collect();
    ReminderPageView { rows, count: page.count }
}

/// Dialog asking the user to publish an email address, since reminders
/// are delivered by mail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNotice {
    pub settings_url: String,
}

pub type ReminderList = ListCore<ReminderPageView, ReminderForm>;

#[derive(Debug, Clone, PartialEq)]
pub struct ReminderScreen {
    pub filters: ReminderFilters,
    pub list: ReminderList,
    pub contact_notice: Option<ContactNotice>,
    settings_url: String,
}

pub enum ReminderAction {
    Reset { today: NaiveDate },
    SetDate(DateSelection),
    SetStatus(Option<ReminderStatus>),
    Search,
    UserLoaded(UserInfo),
    DismissContactNotice,
    List(ListAction<ReminderPageView, ReminderForm>),
}

impl ReminderScreen {
    pub fn new(config: &AppConfig, today: NaiveDate) -> Self {
        let mut screen = Self {
            filters: ReminderFilters::defaults(today),
            list: ListCore::new(config.page_size),
            contact_notice: None,
            settings_url: config.profile_settings_url.clone(),
        };
        screen.list.refresh(screen.can_fetch());
        screen
    }

    pub fn can_fetch(&self) -> bool {
        self.filters.date.range().is_some()
    }

    pub fn query<Tz: TimeZone>(&self, tz: &Tz) -> Option<(u64, ReminderQuery)> {
        let generation = self.list.request_generation()?;
        let range = self.filters.date.range()?;
        let pagination = self.list.table.pagination;
        let query = ReminderQuery {
            page_no: pagination.page_no,
            page_size: pagination.page_size,
            start_date: range.start_millis(tz),
            end_date: range.end_millis(tz),
            status: self.filters.status,
        };
        Some((generation, query))
    }

    fn filters_changed(&mut self) {
        self.list.table.rewind();
        self.list.refresh(self.can_fetch());
    }
}

impl ScreenState for ReminderScreen {
    type Action = ReminderAction;

    fn apply(&mut self, action: ReminderAction) {
        match action {
            ReminderAction::Reset { today } => {
                self.filters = ReminderFilters::defaults(today);
                self.filters_changed();
            }
            ReminderAction::SetDate(date) => {
                self.filters.date = date;
                self.filters_changed();
            }
            ReminderAction::SetStatus(status) => {
                self.filters.status = status;
                self.filters_changed();
            }
            ReminderAction::Search => self.filters_changed(),
            ReminderAction::UserLoaded(user) => {
                self.contact_notice =
                    (!user.has_email()).then(|| ContactNotice { settings_url: self.settings_url.clone() });
            }
            ReminderAction::DismissContactNotice => self.contact_notice = None,
            ReminderAction::List(action) => {
                let can_fetch = self.can_fetch();
                self.list.apply(action, can_fetch);
            }
        }
    }
}
