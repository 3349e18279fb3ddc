//! # Error Types
//!
//! Domain-specific error types for restaurant-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  restaurant-core errors (this file)                                    │
//! │  └── CoreError        - Resolution failures, unknown dish kinds        │
//! │                                                                         │
//! │  restaurant-cli errors (app)                                           │
//! │  └── CliError         - Config, spec parsing, output failures          │
//! │                                                                         │
//! │  Flow: CoreError → CliError → exit code + message                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::dish::DishKind;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A specification matched no catalog entry.
    ///
    /// ## When This Occurs
    /// - No dish of that kind carries the requested name
    /// - The name exists but not in the requested size
    ///
    /// ## Order Workflow
    /// ```text
    /// make_order(Pizza "Calzone", Softdrink "Cola" 33ml)
    ///      │
    ///      ▼
    /// resolve(Pizza "Calzone") → no match
    ///      │
    ///      ▼
    /// DishNotFound { kind: Pizza, name: "Calzone", size: None }
    ///      │
    ///      ▼
    /// No order is produced, Cola is never looked at
    /// ```
    #[error("{kind} '{name}'{} is not on the menu", size_suffix(.size))]
    DishNotFound {
        kind: DishKind,
        name: String,
        size: Option<u32>,
    },

    /// A dish kind string could not be parsed.
    #[error("Unknown dish kind: '{0}'. Valid options: pizza, burger, softdrink, ice_cream")]
    UnknownDishKind(String),
}

fn size_suffix(size: &Option<u32>) -> String {
    match size {
        Some(size) => format!(" (size {})", size),
        None => String::new(),
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_not_found_message() {
        let err = CoreError::DishNotFound {
            kind: DishKind::Pizza,
            name: "Calzone".to_string(),
            size: None,
        };
        assert_eq!(err.to_string(), "pizza 'Calzone' is not on the menu");
    }

    #[test]
    fn test_dish_not_found_message_with_size() {
        let err = CoreError::DishNotFound {
            kind: DishKind::Softdrink,
            name: "Cola".to_string(),
            size: Some(75),
        };
        assert_eq!(err.to_string(), "softdrink 'Cola' (size 75) is not on the menu");
    }

    #[test]
    fn test_unknown_kind_message() {
        let err = CoreError::UnknownDishKind("sushi".to_string());
        assert!(err.to_string().starts_with("Unknown dish kind: 'sushi'"));
    }
}
