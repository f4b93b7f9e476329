use crate::type_info::TypeInfo;
use std::fmt;

/// Errors returned by the `Result`-based accessors on `AnyValue`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyError {
    /// The container holds no value
    Empty,
    /// The container holds a value of a different type than requested
    TypeMismatch {
        expected: TypeInfo,
        found: TypeInfo,
    },
}

impl fmt::Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnyError::Empty => write!(f, "Container holds no value"),
            AnyError::TypeMismatch { expected, found } => {
                write!(f, "Type mismatch: expected {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for AnyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(AnyError::Empty.to_string(), "Container holds no value");

        let err = AnyError::TypeMismatch {
            expected: TypeInfo::of::<i32>(),
            found: TypeInfo::of::<String>(),
        };
        let message = err.to_string();
        assert!(message.starts_with("Type mismatch: expected i32, found "));
        assert!(message.contains("String"));
    }
}
