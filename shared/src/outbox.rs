//! Side effects queued by the screen reducers.
//!
//! A reducer cannot run a request itself. It records what should be sent
//! as a numbered ticket; the view layer sends it and reports back with the
//! same number.

/// Result of a create, update or delete call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Succeeded,
    /// `success: false` from the backend, ignored without a message
    Rejected,
    /// Transport or decoding failure
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteTicket<C> {
    pub id: u64,
    pub command: C,
}

/// At most one write in flight per screen
#[derive(Debug, Clone, PartialEq)]
pub struct Outbox<C> {
    next_id: u64,
    pending: Option<WriteTicket<C>>,
}

impl<C> Default for Outbox<C> {
    fn default() -> Self {
        Self { next_id: 1, pending: None }
    }
}

impl<C> Outbox<C> {
    /// Queue a command. Refused (returns `None`) while another is in flight.
    pub fn push(&mut self, command: C) -> Option<u64> {
        if self.pending.is_some() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.pending = Some(WriteTicket { id, command });
        Some(id)
    }

    /// Remove the ticket `id` once its call has finished
    pub fn settle(&mut self, id: u64) -> Option<C> {
        match &self.pending {
            Some(ticket) if ticket.id == id => self.pending.take().map(|ticket| ticket.command),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<&WriteTicket<C>> {
        self.pending.as_ref()
    }

    pub fn pending_id(&self) -> Option<u64> {
        self.pending.as_ref().map(|ticket| ticket.id)
    }
}

/// A transient warning shown over the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notices {
    issued: u64,
    current: Option<Notice>,
}

impl Notices {
    pub fn warn(&mut self, text: impl Into<String>) {
        self.issued += 1;
        self.current = Some(Notice { id: self.issued, text: text.into() });
    }

    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|notice| notice.id == id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// How many notices were raised over the screen's lifetime
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_write_in_flight() {
        let mut outbox = Outbox::default();
        assert_eq!(outbox.push("create"), Some(1));
        assert_eq!(outbox.push("again"), None);
        assert_eq!(outbox.settle(7), None);
        assert_eq!(outbox.settle(1), Some("create"));
        assert_eq!(outbox.pending_id(), None);
        assert_eq!(outbox.push("next"), Some(2));
    }

    #[test]
    fn test_notice_dismiss_by_id() {
        let mut notices = Notices::default();
        notices.warn("first");
        notices.warn("second");
        assert_eq!(notices.issued(), 2);
        notices.dismiss(1);
        assert_eq!(notices.current().map(|n| n.text.as_str()), Some("second"));
        notices.dismiss(2);
        assert!(notices.current().is_none());
    }
}
