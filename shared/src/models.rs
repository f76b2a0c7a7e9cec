use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

use crate::error::{ApiError, InvalidEnumValue};

/// Millisecond epoch timestamp, the only date representation on the wire
pub type Timestamp = i64;

/// Whether a flow (or flow type) takes money out or brings it in.
///
/// Serialized as the backend's numeric code: `1` expense, `2` income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FlowKind {
    Expense,
    Income,
}

impl FlowKind {
    pub const ALL: [FlowKind; 2] = [FlowKind::Expense, FlowKind::Income];

    pub fn code(&self) -> u8 {
        match self {
            FlowKind::Expense => 1,
            FlowKind::Income => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlowKind::Expense => "Expense",
            FlowKind::Income => "Income",
        }
    }

    /// Prefix put in front of the amount in the flow table
    pub fn symbol(&self) -> &'static str {
        match self {
            FlowKind::Expense => "-",
            FlowKind::Income => "+",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FlowKind::Expense => "#f5222d",
            FlowKind::Income => "#52c41a",
        }
    }
}

impl Default for FlowKind {
    fn default() -> Self {
        FlowKind::ALL[0]
    }
}

impl TryFrom<u8> for FlowKind {
    type Error = InvalidEnumValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FlowKind::Expense),
            2 => Ok(FlowKind::Income),
            _ => Err(InvalidEnumValue { kind: "flow kind", value }),
        }
    }
}

impl From<FlowKind> for u8 {
    fn from(kind: FlowKind) -> Self {
        kind.code()
    }
}

/// Delivery status of a reminder: `1` pending, `2` notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ReminderStatus {
    Pending,
    Notified,
}

impl ReminderStatus {
    pub const ALL: [ReminderStatus; 2] = [ReminderStatus::Pending, ReminderStatus::Notified];

    pub fn code(&self) -> u8 {
        match self {
            ReminderStatus::Pending => 1,
            ReminderStatus::Notified => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReminderStatus::Pending => "Pending",
            ReminderStatus::Notified => "Notified",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ReminderStatus::Pending => "#f50",
            ReminderStatus::Notified => "#87d068",
        }
    }
}

impl TryFrom<u8> for ReminderStatus {
    type Error = InvalidEnumValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ReminderStatus::Pending),
            2 => Ok(ReminderStatus::Notified),
            _ => Err(InvalidEnumValue { kind: "reminder status", value }),
        }
    }
}

impl From<ReminderStatus> for u8 {
    fn from(status: ReminderStatus) -> Self {
        status.code()
    }
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalFlowRecord {
    pub id: i64,
    pub date: Timestamp,
    #[serde(rename = "type")]
    pub kind: FlowKind,
    pub price: f64,
    /// Flow type this record is filed under
    #[serde(default)]
    pub type_name_id: Option<i64>,
    /// Name of that flow type, joined in by the backend
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub remarks: String,
}

/// One page of flow records plus the totals over the whole filter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CapitalFlowPage {
    pub rows: Vec<CapitalFlowRecord>,
    pub count: u64,
    pub income: f64,
    pub consumption: f64,
    pub available: f64,
}

/// Body for creating or updating a flow record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalFlowPayload {
    pub date: Timestamp,
    pub type_name_id: i64,
    pub price: f64,
    pub remarks: String,
}

/// A user-defined flow category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalFlowType {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FlowKind,
    #[serde(default)]
    pub created_at: Timestamp,
}

/// Body for creating or updating a flow type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowTypePayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FlowKind,
}

/// A dated note with a delivery status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderRecord {
    pub id: i64,
    pub date: Timestamp,
    pub content: String,
    #[serde(rename = "type")]
    pub status: ReminderStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderPage {
    pub rows: Vec<ReminderRecord>,
    pub count: u64,
}

/// Body for creating or updating a reminder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderPayload {
    pub date: Timestamp,
    pub content: String,
}

/// Signed-in user as reported by the backend
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub id: Option<i64>,
    pub login_name: String,
    pub email: Option<String>,
}

impl UserInfo {
    /// Reminders are delivered by mail; a blank address counts as missing.
    pub fn has_email(&self) -> bool {
        self.email.as_deref().map(str::trim).is_some_and(|email| !email.is_empty())
    }
}

/// Envelope every backend response is wrapped in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload of a successful response
    pub fn into_data(self) -> Result<T, ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(ApiError::Decode("response is missing its data payload".to_string())),
            (false, _) => Err(ApiError::Rejected { message: self.message }),
        }
    }

    /// Check the success flag only, for calls whose payload is irrelevant
    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected { message: self.message })
        }
    }
}
