use thiserror::Error;

/// Local form validation failures. The `Display` text is the warning shown
/// to the user; no request is sent when one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name cannot be longer than {0} characters")]
    NameTooLong(usize),
    #[error("Reminder content cannot be empty")]
    EmptyContent,
    #[error("Please choose a flow type")]
    MissingCategory,
    #[error("Please enter a positive amount, got \"{0}\"")]
    InvalidPrice(String),
    #[error("Please choose a valid date")]
    InvalidDate,
}

/// Raised before the create modal opens when the account is full
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("You can keep at most {limit} flow types")]
pub struct CategoryLimitReached {
    pub limit: usize,
}

/// Failures talking to the REST backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// The backend answered with `success: false`
    #[error("Request rejected{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Rejected { message: Option<String> },
}

impl ApiError {
    /// Rejections are deliberately silent in the screens; everything else
    /// is a transport problem handled at table level.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

/// A wire value that does not map onto one of the closed enums
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} value {value}")]
pub struct InvalidEnumValue {
    pub kind: &'static str,
    pub value: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_messages() {
        assert_eq!(FormError::EmptyName.to_string(), "Name cannot be empty");
        assert_eq!(FormError::NameTooLong(20).to_string(), "Name cannot be longer than 20 characters");
        assert_eq!(
            FormError::InvalidPrice("abc".to_string()).to_string(),
            "Please enter a positive amount, got \"abc\""
        );
    }

    #[test]
    fn test_rejected_message() {
        let bare = ApiError::Rejected { message: None };
        assert_eq!(bare.to_string(), "Request rejected");
        assert!(bare.is_rejection());

        let with_message = ApiError::Rejected { message: Some("duplicate name".to_string()) };
        assert_eq!(with_message.to_string(), "Request rejected: duplicate name");

        assert!(!ApiError::Network("offline".to_string()).is_rejection());
    }

    #[test]
    fn test_limit_message() {
        assert_eq!(CategoryLimitReached { limit: 100 }.to_string(), "You can keep at most 100 flow types");
    }
}
