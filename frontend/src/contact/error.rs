use thiserror::Error;

pub const GENERIC_FAILURE: &str = "Something went wrong!";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("could not read response: {0}")]
    Parse(String),
}

impl SubmitError {
    /// Text for the failure toast: the server's own message when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_preferred() {
        let err = SubmitError::Status {
            status: 500,
            message: Some("Server busy".to_string()),
        };
        assert_eq!(err.user_message(), "Server busy");
    }

    #[test]
    fn missing_or_blank_message_falls_back() {
        let blank = SubmitError::Status {
            status: 422,
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.user_message(), GENERIC_FAILURE);
        assert_eq!(SubmitError::Network("offline".into()).user_message(), GENERIC_FAILURE);
        assert_eq!(SubmitError::Parse("eof".into()).user_message(), GENERIC_FAILURE);
    }
}
