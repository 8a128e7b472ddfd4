//! # Error Types
//!
//! Domain-specific error types for foodhub-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  foodhub-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations                       │
//! │  ├── ValidationError  - Form input failures                            │
//! │  └── MoneyParseError  - Decimal-string price failures                  │
//! │                                                                         │
//! │  foodhub-store errors                                                  │
//! │  └── StorageError     - Snapshot read/write failures (never surfaced   │
//! │                         by cart operations)                            │
//! │                                                                         │
//! │  foodhub-client errors                                                 │
//! │  └── ClientError      - HTTP / API failures                            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ClientError → CLI message         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart itself has no error type: every cart operation is total.

use thiserror::Error;

use crate::types::OrderStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The meal is not currently offered by its provider.
    #[error("Meal is not available: {0}")]
    MealUnavailable(String),

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Requested order status change is not allowed.
    ///
    /// ## When This Occurs
    /// - Advancing an order that is already delivered or cancelled
    /// - Cancelling an order the kitchen has started preparing
    #[error("Order {order_id} cannot move from {from} to {to}")]
    InvalidTransition {
        order_id: String,
        from: OrderStatus,
        to: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements and are
/// raised before anything is sent to the API.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed price, bad slug).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// Failure to read a decimal-string amount such as `"120.50"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{0}'")]
    Invalid(String),

    #[error("amount '{0}' is too large")]
    Overflow(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
