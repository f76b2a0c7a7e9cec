use std::fmt::Debug;

use crate::error::FormError;
use crate::models::Timestamp;

/// A create/update form bound to one record type
pub trait RecordForm: Clone + PartialEq + Debug {
    type Record;
    type Field;
    type Payload: Clone + PartialEq + Debug;

    /// Fields for a brand-new record
    fn blank(now: Timestamp) -> Self;
    /// Fields seeded from an existing record
    fn from_record(record: &Self::Record) -> Self;
    fn record_id(record: &Self::Record) -> i64;
    fn set(&mut self, field: Self::Field);
    /// Trim and check the fields, producing the request body
    fn validate(&self) -> Result<Self::Payload, FormError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit { id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// Which endpoint a submit goes to, decided by the seed record
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRequest<P> {
    Create(P),
    Update { id: i64, payload: P },
}

impl<P> SubmitRequest<P> {
    pub fn payload(&self) -> &P {
        match self {
            SubmitRequest::Create(payload) | SubmitRequest::Update { payload, .. } => payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditModal<F> {
    Closed,
    Open { mode: ModalMode, fields: F, phase: SubmitPhase },
}

impl<F> Default for EditModal<F> {
    fn default() -> Self {
        EditModal::Closed
    }
}

impl<F: RecordForm> EditModal<F> {
    /// Open for editing `record`, or for creating when `None`.
    ///
    /// Every field is re-seeded; nothing from a previous opening survives.
    pub fn open_with(&mut self, record: Option<&F::Record>, now: Timestamp) {
        *self = match record {
            Some(record) => EditModal::Open {
                mode: ModalMode::Edit { id: F::record_id(record) },
                fields: F::from_record(record),
                phase: SubmitPhase::Idle,
            },
            None => EditModal::Open { mode: ModalMode::Create, fields: F::blank(now), phase: SubmitPhase::Idle },
        };
    }

    pub fn close(&mut self) {
        *self = EditModal::Closed;
    }

    /// Apply a field edit. Ignored while closed or mid-submit.
    pub fn edit(&mut self, field: F::Field) {
        if let EditModal::Open { fields, phase: SubmitPhase::Idle, .. } = self {
            fields.set(field);
        }
    }

    /// Validate and, on success, enter `Submitting`.
    ///
    /// Returns `Ok(None)` when there is nothing to submit (closed, or a
    /// submit already in flight).
    pub fn submit(&mut self) -> Result<Option<SubmitRequest<F::Payload>>, FormError> {
        let EditModal::Open { mode, fields, phase } = self else {
            return Ok(None);
        };
        if *phase == SubmitPhase::Submitting {
            return Ok(None);
        }
        let payload = fields.validate()?;
        *phase = SubmitPhase::Submitting;
        Ok(Some(match mode {
            ModalMode::Create => SubmitRequest::Create(payload),
            ModalMode::Edit { id } => SubmitRequest::Update { id: *id, payload },
        }))
    }

    /// Leave `Submitting`, whatever the outcome was
    pub fn finish_submit(&mut self) {
        if let EditModal::Open { phase, .. } = self {
            *phase = SubmitPhase::Idle;
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditModal::Open { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, EditModal::Open { phase: SubmitPhase::Submitting, .. })
    }

    pub fn fields(&self) -> Option<&F> {
        match self {
            EditModal::Open { fields, .. } => Some(fields),
            EditModal::Closed => None,
        }
    }

    pub fn mode(&self) -> Option<ModalMode> {
        match self {
            EditModal::Open { mode, .. } => Some(*mode),
            EditModal::Closed => None,
        }
    }
}
