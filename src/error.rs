//! Purpose: Error modeling for the encode adapter.
//! Exports: `EncodeError`.
//! Role: Single failure shape; the adapter has exactly one way to fail.
//! Invariants: Encoding errors name the rejected type so callsites can log it.
//! Invariants: Library code propagates errors; it never panics.

use std::error::Error as StdError;
use std::fmt;

/// A value reached the JSON encoder that no encoding path recognizes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncodeError {
    type_name: &'static str,
}

impl EncodeError {
    pub fn unsupported(type_name: &'static str) -> Self {
        Self { type_name }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported type for JSON encoding: {}", self.type_name)
    }
}

impl StdError for EncodeError {}

#[cfg(test)]
mod tests {
    use super::EncodeError;

    #[test]
    fn display_names_the_rejected_type() {
        let err = EncodeError::unsupported("alloc::string::String");
        assert_eq!(
            err.to_string(),
            "unsupported type for JSON encoding: alloc::string::String"
        );
        assert_eq!(err.type_name(), "alloc::string::String");
    }
}
