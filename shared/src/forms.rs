//! Field sets behind the three edit modals

use crate::error::FormError;
use crate::modal::RecordForm;
use crate::models::{
    CapitalFlowPayload, CapitalFlowRecord, CapitalFlowType, FlowKind, FlowTypePayload, ReminderPayload,
    ReminderRecord, Timestamp,
};

pub const MAX_TYPE_NAME_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct FlowTypeForm {
    pub name: String,
    pub kind: FlowKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlowTypeField {
    Name(String),
    Kind(FlowKind),
}

impl RecordForm for FlowTypeForm {
    type Record = CapitalFlowType;
    type Field = FlowTypeField;
    type Payload = FlowTypePayload;

    fn blank(_now: Timestamp) -> Self {
        Self { name: String::new(), kind: FlowKind::default() }
    }

    fn from_record(record: &CapitalFlowType) -> Self {
        Self { name: record.name.clone(), kind: record.kind }
    }

    fn record_id(record: &CapitalFlowType) -> i64 {
        record.id
    }

    fn set(&mut self, field: FlowTypeField) {
        match field {
            FlowTypeField::Name(name) => self.name = name,
            FlowTypeField::Kind(kind) => self.kind = kind,
        }
    }

    fn validate(&self) -> Result<FlowTypePayload, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        if name.chars().count() > MAX_TYPE_NAME_LEN {
            return Err(FormError::NameTooLong(MAX_TYPE_NAME_LEN));
        }
        Ok(FlowTypePayload { name: name.to_string(), kind: self.kind })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReminderForm {
    /// `None` after the date input was cleared
    pub date: Option<Timestamp>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReminderField {
    Date(Option<Timestamp>),
    Content(String),
}

impl RecordForm for ReminderForm {
    type Record = ReminderRecord;
    type Field = ReminderField;
    type Payload = ReminderPayload;

    fn blank(now: Timestamp) -> Self {
        Self { date: Some(now), content: String::new() }
    }

    fn from_record(record: &ReminderRecord) -> Self {
        Self { date: Some(record.date), content: record.content.clone() }
    }

    fn record_id(record: &ReminderRecord) -> i64 {
        record.id
    }

    fn set(&mut self, field: ReminderField) {
        match field {
            ReminderField::Date(date) => self.date = date,
            ReminderField::Content(content) => self.content = content,
        }
    }

    fn validate(&self) -> Result<ReminderPayload, FormError> {
        let date = self.date.ok_or(FormError::InvalidDate)?;
        let content = self.content.trim();
        if content.is_empty() {
            return Err(FormError::EmptyContent);
        }
        Ok(ReminderPayload { date, content: content.to_string() })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CapitalFlowForm {
    pub date: Option<Timestamp>,
    pub type_name_id: Option<i64>,
    /// Raw text of the amount input
    pub price: String,
    pub remarks: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CapitalFlowField {
    Date(Option<Timestamp>),
    TypeNameId(Option<i64>),
    Price(String),
    Remarks(String),
}

impl RecordForm for CapitalFlowForm {
    type Record = CapitalFlowRecord;
    type Field = CapitalFlowField;
    type Payload = CapitalFlowPayload;

    fn blank(now: Timestamp) -> Self {
        Self { date: Some(now), type_name_id: None, price: String::new(), remarks: String::new() }
    }

    fn from_record(record: &CapitalFlowRecord) -> Self {
        Self {
            date: Some(record.date),
            type_name_id: record.type_name_id,
            price: format_price_input(record.price),
            remarks: record.remarks.clone(),
        }
    }

    fn record_id(record: &CapitalFlowRecord) -> i64 {
        record.id
    }

    fn set(&mut self, field: CapitalFlowField) {
        match field {
            CapitalFlowField::Date(date) => self.date = date,
            CapitalFlowField::TypeNameId(id) => self.type_name_id = id,
            CapitalFlowField::Price(price) => self.price = price,
            CapitalFlowField::Remarks(remarks) => self.remarks = remarks,
        }
    }

    fn validate(&self) -> Result<CapitalFlowPayload, FormError> {
        let date = self.date.ok_or(FormError::InvalidDate)?;
        let type_name_id = self.type_name_id.ok_or(FormError::MissingCategory)?;
        let raw = self.price.trim();
        // Positive in cents, as sent
        let price = raw
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .map(|price| (price * 100.0).round() / 100.0)
            .filter(|price| *price > 0.0)
            .ok_or_else(|| FormError::InvalidPrice(raw.to_string()))?;
        Ok(CapitalFlowPayload {
            date,
            type_name_id,
            price,
            remarks: self.remarks.trim().to_string(),
        })
    }
}

/// Amount as it is put back into the input: no trailing `.0` for whole values
fn format_price_input(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        format!("{price}")
    }
}
