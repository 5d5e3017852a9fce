use thiserror::Error;

/// Errors raised by sequence operations.
///
/// Every variant describes a caller error. Operations check their arguments
/// before touching the sequence, so a returned error always means the
/// sequence is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The element argument was not exactly one character.
    #[error("element must be exactly one character, got {element:?}")]
    InvalidElement { element: String },

    /// The index argument fell outside the range allowed by the operation.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl SequenceError {
    pub fn invalid_element(element: impl Into<String>) -> SequenceError {
        SequenceError::InvalidElement {
            element: element.into(),
        }
    }

    pub fn index_out_of_range(index: usize, len: usize) -> SequenceError {
        SequenceError::IndexOutOfRange { index, len }
    }
}

pub type Result<T> = std::result::Result<T, SequenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SequenceError::invalid_element("AB");
        assert_eq!(
            err.to_string(),
            "element must be exactly one character, got \"AB\""
        );

        let err = SequenceError::index_out_of_range(7, 3);
        assert_eq!(
            err.to_string(),
            "index 7 out of range for sequence of length 3"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            SequenceError::index_out_of_range(1, 0),
            SequenceError::IndexOutOfRange { index: 1, len: 0 }
        );
        assert_ne!(
            SequenceError::invalid_element(""),
            SequenceError::invalid_element("AB")
        );
    }
}
