//! # Error Module
//!
//! Định nghĩa các domain errors cho Tollgate sử dụng thiserror.

use thiserror::Error;

/// Core domain errors.
///
/// `InvalidCategory` và `MissingCategory` là hai lỗi tách biệt:
/// tag có giá trị nhưng không thuộc tập loại xe, và không có tag nào.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TollError {
    // === Vehicle errors ===
    #[error("Not a known vehicle type: {0}")]
    InvalidCategory(String),

    #[error("Vehicle type is missing")]
    MissingCategory,

    // === Time errors ===
    #[error("Hour out of range 0..24: {0}")]
    InvalidHour(u32),
}

/// Result type alias với TollError
pub type TollResult<T> = Result<T, TollError>;

impl TollError {
    /// Kiểm tra có phải lỗi tag không thuộc tập loại xe
    pub fn is_invalid_category(&self) -> bool {
        matches!(self, TollError::InvalidCategory(_))
    }

    /// Kiểm tra có phải lỗi thiếu tag loại xe
    pub fn is_missing_category(&self) -> bool {
        matches!(self, TollError::MissingCategory)
    }

    /// Lỗi liên quan đến loại xe (invalid hoặc missing)
    pub fn is_category_error(&self) -> bool {
        self.is_invalid_category() || self.is_missing_category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TollError::InvalidCategory("boat".to_string());
        assert_eq!(err.to_string(), "Not a known vehicle type: boat");

        assert_eq!(
            TollError::MissingCategory.to_string(),
            "Vehicle type is missing"
        );

        assert_eq!(
            TollError::InvalidHour(24).to_string(),
            "Hour out of range 0..24: 24"
        );
    }

    #[test]
    fn test_error_checks() {
        let invalid = TollError::InvalidCategory("boat".to_string());
        assert!(invalid.is_invalid_category());
        assert!(!invalid.is_missing_category());
        assert!(invalid.is_category_error());

        let missing = TollError::MissingCategory;
        assert!(missing.is_missing_category());
        assert!(!missing.is_invalid_category());
        assert!(missing.is_category_error());

        assert!(!TollError::InvalidHour(25).is_category_error());
    }
}
